// ABOUTME: Integration tests for the weekly calorie report
// ABOUTME: Covers empty ledgers, weekday sums, skipped rows and legacy ledgers without dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Weekday;
use common::day;
use mai_coach::intelligence::{weekly_calories, WEEK_ORDER};
use mai_coach::models::WorkoutEntry;
use mai_coach::reporting::{weekly_report, ChartSpec, WeeklyReport};
use mai_coach::storage::WorkoutLedger;
use std::fs;

#[test]
fn test_report_without_ledger_is_no_data() {
    let (_dir, storage) = common::temp_storage();

    let report = weekly_report(&WorkoutLedger::from_config(&storage)).unwrap();

    assert_eq!(report, WeeklyReport::NoData);
}

#[test]
fn test_report_on_blank_ledger_is_no_data() {
    let (_dir, storage) = common::temp_storage();
    let ledger = WorkoutLedger::from_config(&storage);
    fs::write(ledger.path(), "\n").unwrap();

    assert_eq!(weekly_report(&ledger).unwrap(), WeeklyReport::NoData);
}

#[test]
fn test_two_mondays_sum_into_one_bar() {
    let (_dir, storage) = common::temp_storage();
    let ledger = WorkoutLedger::from_config(&storage);
    ledger
        .append(&WorkoutEntry::new("Run", "Cardio", 30.0, 300.0, day(2024, 1, 1)))
        .unwrap();
    ledger
        .append(&WorkoutEntry::new("Lift", "Strength", 45.0, 200.0, day(2024, 1, 8)))
        .unwrap();

    let WeeklyReport::Series {
        series,
        skipped_rows,
        chart,
    } = weekly_report(&ledger).unwrap()
    else {
        panic!("expected a series");
    };

    assert_eq!(series.get(Weekday::Mon), Some(500.0));
    for weekday in WEEK_ORDER.iter().skip(1) {
        assert_eq!(series.get(*weekday), None);
    }
    assert!(skipped_rows.is_empty());
    assert_eq!(chart, ChartSpec::calories_per_day());
}

#[test]
fn test_unparsable_rows_are_reported_and_excluded() {
    let (_dir, storage) = common::temp_storage();
    fs::write(
        storage.ledger_path(),
        "Name,Type,Duration,Calories Burned,Date\n\
         Run,Cardio,30,300,2024-01-02\n\
         Broken,Cardio,30,lots,2024-01-02\n\
         Walk,Cardio,20,100,sometime\n",
    )
    .unwrap();

    let WeeklyReport::Series {
        series,
        skipped_rows,
        ..
    } = weekly_report(&WorkoutLedger::from_config(&storage)).unwrap()
    else {
        panic!("expected a series");
    };

    assert_eq!(series.get(Weekday::Tue), Some(300.0));
    assert_eq!(series.days_with_data(), 1);
    assert_eq!(skipped_rows.len(), 1);
}

#[test]
fn test_ledger_without_date_column_reports_schema_mismatch() {
    let (_dir, storage) = common::temp_storage();
    fs::write(
        storage.ledger_path(),
        "Name,Type,Duration,Calories Burned\nRun,Cardio,30,300\n",
    )
    .unwrap();

    let report = weekly_report(&WorkoutLedger::from_config(&storage)).unwrap();

    assert_eq!(
        report,
        WeeklyReport::SchemaMismatch {
            missing: vec!["Date".to_owned()]
        }
    );
}

#[test]
fn test_series_serializes_monday_first_with_nulls() {
    let series = weekly_calories(&[WorkoutEntry::new(
        "Swim",
        "Cardio",
        40.0,
        350.0,
        day(2024, 1, 7),
    )]);

    let json = serde_json::to_value(series).unwrap();

    assert_eq!(json[0]["day"], "Monday");
    assert!(json[0]["calories"].is_null());
    assert_eq!(json[6]["day"], "Sunday");
    assert_eq!(json[6]["calories"], 350.0);
}
