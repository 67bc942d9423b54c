// ABOUTME: Integration tests for the profile store
// ABOUTME: Covers save/load round trips, absence reasons and atomic replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use mai_coach::models::Profile;
use mai_coach::storage::{Absence, ProfileStore, StoredProfile};
use std::fs;

#[test]
fn test_fresh_installation_loads_as_never_saved() {
    let (_dir, storage) = common::temp_storage();
    let store = ProfileStore::from_config(&storage);

    assert_eq!(store.load(), StoredProfile::Absent(Absence::NeverSaved));
}

#[test]
fn test_save_then_load_returns_same_profile() {
    let (_dir, storage) = common::temp_storage();
    let store = ProfileStore::from_config(&storage);
    let profile = Profile::new("build muscle", "beginner");

    store.save(&profile).unwrap();

    assert_eq!(store.load(), StoredProfile::Present(profile));
}

#[test]
fn test_save_overwrites_previous_profile() {
    let (_dir, storage) = common::temp_storage();
    let store = ProfileStore::from_config(&storage);

    store.save(&Profile::new("lose weight", "beginner")).unwrap();
    store.save(&Profile::new("run a marathon", "advanced")).unwrap();

    let loaded = store.load().into_profile().unwrap();
    assert_eq!(loaded, Profile::new("run a marathon", "advanced"));
}

#[test]
fn test_empty_fields_round_trip() {
    let (_dir, storage) = common::temp_storage();
    let store = ProfileStore::from_config(&storage);
    let profile = Profile::new("", "");

    store.save(&profile).unwrap();

    let loaded = store.load().into_profile().unwrap();
    assert_eq!(loaded, profile);
    assert!(!loaded.is_complete());
}

#[test]
fn test_record_uses_expected_json_keys() {
    let (_dir, storage) = common::temp_storage();
    let store = ProfileStore::from_config(&storage);

    store.save(&Profile::new("get fit", "intermediate")).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(storage.profile_path()).unwrap()).unwrap();
    assert_eq!(raw["goal"], "get fit");
    assert_eq!(raw["experience_level"], "intermediate");
}

#[test]
fn test_garbage_record_loads_as_malformed() {
    let (_dir, storage) = common::temp_storage();
    fs::write(storage.profile_path(), "{not json").unwrap();

    let loaded = ProfileStore::from_config(&storage).load();

    assert!(matches!(loaded, StoredProfile::Absent(Absence::Malformed(_))));
}

#[test]
fn test_directory_in_place_of_record_loads_as_unreadable() {
    let (_dir, storage) = common::temp_storage();
    fs::create_dir(storage.profile_path()).unwrap();

    let loaded = ProfileStore::from_config(&storage).load();

    assert!(matches!(loaded, StoredProfile::Absent(Absence::Unreadable(_))));
}

#[test]
fn test_save_creates_missing_data_directory() {
    let (dir, _storage) = common::temp_storage();
    let store = ProfileStore::new(dir.path().join("nested").join("user_data.json"));

    store.save(&Profile::new("stay active", "beginner")).unwrap();

    assert!(store.load().is_present());
}

#[test]
fn test_save_leaves_no_temporary_file_behind() {
    let (dir, storage) = common::temp_storage();
    let store = ProfileStore::from_config(&storage);

    store.save(&Profile::new("stay active", "beginner")).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["user_data.json"]);
}
