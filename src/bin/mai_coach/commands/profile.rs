// ABOUTME: Profile commands for mai-coach
// ABOUTME: Shows or replaces the saved training profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mai_coach::{
    config::CoachConfig,
    errors::AppResult,
    models::Profile,
    storage::{Absence, ProfileStore, StoredProfile},
};

type Result<T> = AppResult<T>;

/// Print the saved profile, or why there is none
pub fn show(config: &CoachConfig) -> Result<()> {
    let store = ProfileStore::from_config(&config.storage);
    match store.load() {
        StoredProfile::Present(profile) if profile.is_complete() => {
            println!("Goal:             {}", profile.goal);
            println!("Experience level: {}", profile.experience_level);
        }
        StoredProfile::Present(_) => {
            println!("Profile is incomplete. Run `mai-coach profile set` to fill it in.");
        }
        StoredProfile::Absent(Absence::NeverSaved) => {
            println!("No profile saved yet. Run `mai-coach profile set`.");
        }
        StoredProfile::Absent(Absence::Malformed(reason) | Absence::Unreadable(reason)) => {
            println!(
                "Saved profile at {} could not be used ({reason}). Save a new one with `mai-coach profile set`.",
                store.path().display()
            );
        }
    }
    Ok(())
}

/// Save a new profile
pub fn set(config: &CoachConfig, goal: &str, experience_level: &str) -> Result<()> {
    let profile = Profile::new(goal.trim(), experience_level.trim());
    ProfileStore::from_config(&config.storage).save(&profile)?;
    println!("Profile saved.");
    Ok(())
}
