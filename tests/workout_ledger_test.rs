// ABOUTME: Integration tests for the append-only workout ledger
// ABOUTME: Covers header handling, append order, malformed rows and schema mismatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::day;
use mai_coach::errors::{AppError, ErrorCode};
use mai_coach::models::{EntryDate, WorkoutEntry};
use mai_coach::storage::{LedgerError, RowPolicy, WorkoutLedger};
use std::fs;

const HEADER_LINE: &str = "Name,Type,Duration,Calories Burned,Date";

fn ledger() -> (tempfile::TempDir, WorkoutLedger) {
    let (dir, storage) = common::temp_storage();
    let ledger = WorkoutLedger::from_config(&storage);
    (dir, ledger)
}

#[test]
fn test_missing_file_loads_as_absent_snapshot() {
    let (_dir, ledger) = ledger();

    let snapshot = ledger.load_all(RowPolicy::Abort).unwrap();

    assert!(snapshot.is_absent());
    assert!(snapshot.entries().is_empty());
    assert!(!ledger.exists());
}

#[test]
fn test_first_append_writes_header_once() {
    let (_dir, ledger) = ledger();

    ledger
        .append(&WorkoutEntry::new("Morning run", "Cardio", 30.0, 300.0, day(2024, 1, 1)))
        .unwrap();
    ledger
        .append(&WorkoutEntry::new("Bench press", "Strength", 45.0, 200.0, day(2024, 1, 2)))
        .unwrap();

    let raw = fs::read_to_string(ledger.path()).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(
        lines,
        vec![
            HEADER_LINE,
            "Morning run,Cardio,30,300,2024-01-01",
            "Bench press,Strength,45,200,2024-01-02",
        ]
    );
}

#[test]
fn test_append_to_empty_file_writes_header() {
    let (_dir, ledger) = ledger();
    fs::write(ledger.path(), "").unwrap();

    ledger
        .append(&WorkoutEntry::new("Yoga", "Flexibility", 60.0, 150.0, day(2024, 2, 5)))
        .unwrap();

    let raw = fs::read_to_string(ledger.path()).unwrap();
    assert!(raw.starts_with(HEADER_LINE));
    assert_eq!(raw.matches(HEADER_LINE).count(), 1);
}

#[test]
fn test_append_to_blank_file_replaces_it_with_header() {
    let (_dir, ledger) = ledger();
    fs::write(ledger.path(), "\n").unwrap();

    ledger
        .append(&WorkoutEntry::new("Yoga", "Flexibility", 60.0, 150.0, day(2024, 2, 5)))
        .unwrap();

    let raw = fs::read_to_string(ledger.path()).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines, vec![HEADER_LINE, "Yoga,Flexibility,60,150,2024-02-05"]);

    let snapshot = ledger.load_all(RowPolicy::Abort).unwrap();
    assert_eq!(snapshot.entries().len(), 1);
}

#[test]
fn test_blank_file_loads_as_absent_snapshot() {
    let (_dir, ledger) = ledger();
    fs::write(ledger.path(), "  \n\r\n\t\n").unwrap();

    let snapshot = ledger.load_all(RowPolicy::Abort).unwrap();

    assert!(snapshot.is_absent());
    assert!(snapshot.entries().is_empty());
    assert!(!ledger.exists());
}

#[test]
fn test_reload_returns_entries_in_append_order() {
    let (_dir, ledger) = ledger();
    let entries = vec![
        WorkoutEntry::new("Run", "Cardio", 30.0, 300.0, day(2024, 1, 3)),
        WorkoutEntry::new("Row", "Cardio", 20.5, 180.25, day(2024, 1, 1)),
        WorkoutEntry::new("Squat, heavy", "Strength", 40.0, 220.0, day(2024, 1, 2)),
        WorkoutEntry::new("Run", "Cardio", 30.0, 300.0, day(2024, 1, 3)),
    ];
    for entry in &entries {
        ledger.append(entry).unwrap();
    }

    let snapshot = ledger.load_all(RowPolicy::Abort).unwrap();

    assert!(!snapshot.is_absent());
    assert_eq!(snapshot.entries(), entries.as_slice());
    assert!(snapshot.skipped_rows().is_empty());
}

#[test]
fn test_malformed_row_is_skipped_with_skip_policy() {
    let (_dir, ledger) = ledger();
    fs::write(
        ledger.path(),
        format!(
            "{HEADER_LINE}\nRun,Cardio,30,300,2024-01-01\nBroken,Cardio,thirty,300,2024-01-02\nLift,Strength,45,200,2024-01-03\n"
        ),
    )
    .unwrap();

    let snapshot = ledger.load_all(RowPolicy::SkipAndWarn).unwrap();

    let names: Vec<&str> = snapshot.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Run", "Lift"]);
    assert_eq!(snapshot.skipped_rows().len(), 1);
    assert_eq!(snapshot.skipped_rows()[0].line, 3);
}

#[test]
fn test_malformed_row_aborts_with_abort_policy() {
    let (_dir, ledger) = ledger();
    fs::write(
        ledger.path(),
        format!("{HEADER_LINE}\nRun,Cardio,30,300,2024-01-01\nShort,Cardio,30\n"),
    )
    .unwrap();

    let error = ledger.load_all(RowPolicy::Abort).unwrap_err();

    assert!(matches!(error, LedgerError::MalformedRecord { line: 3, .. }));
    assert_eq!(AppError::from(error).code, ErrorCode::MalformedRecord);
}

#[test]
fn test_unrecognized_date_is_kept_not_malformed() {
    let (_dir, ledger) = ledger();
    fs::write(
        ledger.path(),
        format!("{HEADER_LINE}\nRun,Cardio,30,300,last tuesday\n"),
    )
    .unwrap();

    let snapshot = ledger.load_all(RowPolicy::Abort).unwrap();

    assert_eq!(snapshot.entries().len(), 1);
    assert_eq!(
        snapshot.entries()[0].date,
        EntryDate::Unrecognized("last tuesday".to_owned())
    );
}

#[test]
fn test_missing_date_column_is_schema_mismatch() {
    let (_dir, ledger) = ledger();
    fs::write(
        ledger.path(),
        "Name,Type,Duration,Calories Burned\nRun,Cardio,30,300\n",
    )
    .unwrap();

    let error = ledger.load_all(RowPolicy::SkipAndWarn).unwrap_err();

    assert!(
        matches!(error, LedgerError::SchemaMismatch { ref missing } if missing == &["Date"])
    );
    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::SchemaMismatch);
    assert_eq!(app_error.details["missing"][0], "Date");
}

#[test]
fn test_append_refuses_mismatched_header() {
    let (_dir, ledger) = ledger();
    let legacy = "Name,Type,Duration,Calories Burned\nRun,Cardio,30,300\n";
    fs::write(ledger.path(), legacy).unwrap();

    let result = ledger.append(&WorkoutEntry::new("Run", "Cardio", 30.0, 300.0, day(2024, 1, 1)));

    assert!(matches!(result, Err(LedgerError::SchemaMismatch { .. })));
    assert_eq!(fs::read_to_string(ledger.path()).unwrap(), legacy);
}

#[test]
fn test_reordered_columns_are_resolved_by_name() {
    let (_dir, ledger) = ledger();
    fs::write(
        ledger.path(),
        "Date,Name,Calories Burned,Type,Duration\n2024-01-01,Run,300,Cardio,30\n",
    )
    .unwrap();
    ledger
        .append(&WorkoutEntry::new("Swim", "Cardio", 40.0, 350.0, day(2024, 1, 2)))
        .unwrap();

    let snapshot = ledger.load_all(RowPolicy::Abort).unwrap();

    assert_eq!(
        snapshot.entries(),
        &[
            WorkoutEntry::new("Run", "Cardio", 30.0, 300.0, day(2024, 1, 1)),
            WorkoutEntry::new("Swim", "Cardio", 40.0, 350.0, day(2024, 1, 2)),
        ]
    );
}

#[test]
fn test_logged_today_uses_current_local_date() {
    let entry = WorkoutEntry::logged_today("Walk", "Cardio", 20.0, 90.0);
    assert!(entry.date.as_date().is_some());
}
