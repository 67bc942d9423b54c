// ABOUTME: Workout ledger entry model with tolerant calendar date handling
// ABOUTME: WorkoutEntry is one CSV row; EntryDate keeps hand-edited dates verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::ledger::DATE_FORMAT;

/// Date-time layouts accepted in addition to the canonical `YYYY-MM-DD`
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Other date layouts found in hand-edited ledgers; slash dates with the year
/// last are read month first
const ALTERNATE_DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%m/%d/%Y"];

/// Date of a workout as stored in the ledger
///
/// Rows written by the ledger always carry a calendar date. Hand-edited files
/// may contain anything, so text that is not a recognizable date is kept as-is
/// instead of failing the whole row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryDate {
    /// A recognized calendar date
    Day(NaiveDate),
    /// Raw cell text that is not a recognizable date (possibly empty)
    Unrecognized(String),
}

impl EntryDate {
    /// Parse a ledger cell
    ///
    /// Accepts `YYYY-MM-DD`, the same date followed by a time, `YYYY/MM/DD`
    /// and `MM/DD/YYYY`. Slash dates ending in the year are always read in US
    /// order, so `03/04/2024` is March 4 and `25/12/2024` is unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if let Ok(day) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
            return Self::Day(day);
        }
        for format in DATE_TIME_FORMATS {
            if let Ok(moment) = NaiveDateTime::parse_from_str(text, format) {
                return Self::Day(moment.date());
            }
        }
        for format in ALTERNATE_DATE_FORMATS {
            if let Ok(day) = NaiveDate::parse_from_str(text, format) {
                return Self::Day(day);
            }
        }
        Self::Unrecognized(raw.to_owned())
    }

    /// Calendar date, if the cell held one
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(day) => Some(*day),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(day: NaiveDate) -> Self {
        Self::Day(day)
    }
}

impl From<String> for EntryDate {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<EntryDate> for String {
    fn from(date: EntryDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "{}", day.format(DATE_FORMAT)),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// One logged workout
///
/// Numbers are stored as entered; the core does not check that they are
/// positive. Entries have no identity and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Workout name (e.g. "Morning run")
    pub name: String,
    /// Workout type (e.g. "Cardio")
    pub workout_type: String,
    /// Duration in minutes
    pub duration_minutes: f64,
    /// Calories burned
    pub calories_burned: f64,
    /// Day the workout was logged for
    pub date: EntryDate,
}

impl WorkoutEntry {
    /// Create an entry for a specific day
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        workout_type: impl Into<String>,
        duration_minutes: f64,
        calories_burned: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            workout_type: workout_type.into(),
            duration_minutes,
            calories_burned,
            date: EntryDate::Day(date),
        }
    }

    /// Create an entry dated today (local time)
    #[must_use]
    pub fn logged_today(
        name: impl Into<String>,
        workout_type: impl Into<String>,
        duration_minutes: f64,
        calories_burned: f64,
    ) -> Self {
        Self::new(
            name,
            workout_type,
            duration_minutes,
            calories_burned,
            Local::now().date_naive(),
        )
    }
}
