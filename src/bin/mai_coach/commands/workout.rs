// ABOUTME: Workout commands for mai-coach
// ABOUTME: Appends workouts to the ledger and prints the weekly calorie report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use mai_coach::{
    config::CoachConfig,
    errors::{AppError, AppResult},
    models::WorkoutEntry,
    reporting::{render_table, weekly_report, WeeklyReport},
    storage::WorkoutLedger,
};

type Result<T> = AppResult<T>;

/// Append one workout to the ledger
pub fn log(
    config: &CoachConfig,
    name: String,
    workout_type: String,
    duration: f64,
    calories: f64,
    date: Option<NaiveDate>,
) -> Result<()> {
    let entry = match date {
        Some(day) => WorkoutEntry::new(name, workout_type, duration, calories, day),
        None => WorkoutEntry::logged_today(name, workout_type, duration, calories),
    };

    WorkoutLedger::from_config(&config.storage).append(&entry)?;
    println!("Logged {} on {}.", entry.name, entry.date);
    Ok(())
}

/// Print calories per weekday
pub fn report(config: &CoachConfig, json: bool) -> Result<()> {
    let report = weekly_report(&WorkoutLedger::from_config(&config.storage))?;

    if json {
        let body = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::internal(format!("Failed to encode report: {e}")))?;
        println!("{body}");
        return Ok(());
    }

    match report {
        WeeklyReport::NoData => println!("No workout data found."),
        WeeklyReport::SchemaMismatch { missing } => {
            println!(
                "The workout log is missing required columns: {}",
                missing.join(", ")
            );
        }
        WeeklyReport::Series {
            series,
            skipped_rows,
            chart,
        } => {
            println!("{}", chart.title);
            println!("{:<10} {:>8}", chart.x_label, chart.y_label);
            print!("{}", render_table(&series));
            if !skipped_rows.is_empty() {
                println!("({} unreadable rows skipped)", skipped_rows.len());
            }
        }
    }
    Ok(())
}
