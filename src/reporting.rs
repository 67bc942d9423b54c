// ABOUTME: Weekly calorie report built from the workout ledger for charting shells
// ABOUTME: Distinguishes no data, schema problems and a ready-to-plot weekday series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weekly Report
//!
//! Loads the ledger with [`RowPolicy::SkipAndWarn`], sums calories per
//! weekday and hands back the series together with the chart labels.

use std::fmt::Write as _;

use mai_coach_core::constants::chart::{TITLE, X_LABEL, Y_LABEL};
use mai_coach_intelligence::{weekly_calories, WeekdaySeries};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppResult;
use crate::storage::{LedgerError, RowPolicy, SkippedRow, WorkoutLedger};

/// Labels for the calories-per-weekday chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    /// Figure title
    pub title: &'static str,
    /// X axis label
    pub x_label: &'static str,
    /// Y axis label
    pub y_label: &'static str,
}

impl ChartSpec {
    /// Labels for the weekly calories chart
    #[must_use]
    pub const fn calories_per_day() -> Self {
        Self {
            title: TITLE,
            x_label: X_LABEL,
            y_label: Y_LABEL,
        }
    }
}

/// What the charting shell should show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeeklyReport {
    /// No workouts have been logged
    NoData,
    /// The ledger lacks columns the report needs
    SchemaMismatch {
        /// Missing column names
        missing: Vec<String>,
    },
    /// Calories per weekday, Monday first
    Series {
        /// Summed calories, `None` for days without workouts
        series: WeekdaySeries,
        /// Rows left out because they could not be parsed
        skipped_rows: Vec<SkippedRow>,
        /// Chart labels
        chart: ChartSpec,
    },
}

/// Build the weekly calorie report from the ledger
///
/// # Errors
///
/// Returns a storage error when the ledger exists but cannot be read.
pub fn weekly_report(ledger: &WorkoutLedger) -> AppResult<WeeklyReport> {
    let snapshot = match ledger.load_all(RowPolicy::SkipAndWarn) {
        Ok(snapshot) => snapshot,
        Err(LedgerError::SchemaMismatch { missing }) => {
            info!(?missing, "Workout ledger is missing columns");
            return Ok(WeeklyReport::SchemaMismatch { missing });
        }
        Err(e) => return Err(e.into()),
    };

    if snapshot.is_absent() {
        debug!("No workouts logged; nothing to report");
        return Ok(WeeklyReport::NoData);
    }

    let series = weekly_calories(snapshot.entries());
    Ok(WeeklyReport::Series {
        series,
        skipped_rows: snapshot.skipped_rows().to_vec(),
        chart: ChartSpec::calories_per_day(),
    })
}

/// Plain-text rendering of a series, one weekday per line
#[must_use]
pub fn render_table(series: &WeekdaySeries) -> String {
    let mut out = String::new();
    for point in series.points() {
        let _ = match point.calories {
            Some(calories) => writeln!(out, "{:<10} {calories:>8.0}", point.day),
            None => writeln!(out, "{:<10} {:>8}", point.day, "-"),
        };
    }
    out
}
