// ABOUTME: Workout aggregation engine for the mAI Coach ledger
// ABOUTME: Derives per-weekday calorie series for the charting collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # mAI Coach Intelligence
//!
//! Pure functions over workout ledger entries. Nothing in this crate touches
//! storage; callers load the ledger and hand the entries in.

/// Weekday grouping and calorie sums
pub mod weekly;

pub use weekly::{weekday_name, weekly_calories, WeekdayPoint, WeekdaySeries, WEEK_ORDER};
