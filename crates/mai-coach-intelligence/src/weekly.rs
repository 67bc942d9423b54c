// ABOUTME: Weekly calorie aggregation grouping workout entries by calendar weekday
// ABOUTME: Produces a fixed Monday-first series where days without workouts carry no value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Weekday};
use mai_coach_core::models::WorkoutEntry;
use serde::Serialize;
use tracing::debug;

/// Display order of the series
pub const WEEK_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One point of the weekday series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayPoint {
    /// Weekday
    #[serde(skip)]
    pub weekday: Weekday,
    /// Full weekday name (e.g. "Monday")
    pub day: &'static str,
    /// Summed calories, `None` when no workout fell on this weekday
    pub calories: Option<f64>,
}

/// Calories summed per weekday, Monday through Sunday
///
/// `None` means "no workouts on this weekday" and is deliberately different
/// from `Some(0.0)`, which is a logged workout that burned nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeekdaySeries {
    values: [Option<f64>; 7],
}

impl WeekdaySeries {
    /// Series with every day marked "no data"
    #[must_use]
    pub const fn empty() -> Self {
        Self { values: [None; 7] }
    }

    /// Value for one weekday
    #[must_use]
    pub fn get(&self, day: Weekday) -> Option<f64> {
        self.values[day.num_days_from_monday() as usize]
    }

    /// Values in Monday-first order
    #[must_use]
    pub const fn values(&self) -> &[Option<f64>; 7] {
        &self.values
    }

    /// Points in Monday-first order
    #[must_use]
    pub fn points(&self) -> Vec<WeekdayPoint> {
        WEEK_ORDER
            .iter()
            .map(|&weekday| WeekdayPoint {
                weekday,
                day: weekday_name(weekday),
                calories: self.get(weekday),
            })
            .collect()
    }

    /// True when no weekday has data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Number of weekdays with at least one workout
    #[must_use]
    pub fn days_with_data(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Sum over all weekdays
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().flatten().sum()
    }

    fn add(&mut self, day: Weekday, calories: f64) {
        let slot = &mut self.values[day.num_days_from_monday() as usize];
        *slot = Some(slot.unwrap_or(0.0) + calories);
    }
}

impl Serialize for WeekdaySeries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.points().serialize(serializer)
    }
}

/// Sum calories per weekday
///
/// Entries whose date is not a recognizable calendar date are left out of the
/// sums. The result depends only on the entries, never on the current time.
#[must_use]
pub fn weekly_calories(entries: &[WorkoutEntry]) -> WeekdaySeries {
    let mut series = WeekdaySeries::empty();
    let mut undated = 0_usize;

    for entry in entries {
        match entry.date.as_date() {
            Some(day) => series.add(day.weekday(), entry.calories_burned),
            None => undated += 1,
        }
    }

    debug!(
        entries = entries.len(),
        undated,
        days_with_data = series.days_with_data(),
        "Aggregated weekly calories"
    );

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mai_coach_core::models::EntryDate;

    fn entry(date: &str, calories: f64) -> WorkoutEntry {
        WorkoutEntry {
            name: "Session".to_owned(),
            workout_type: "Cardio".to_owned(),
            duration_minutes: 30.0,
            calories_burned: calories,
            date: EntryDate::parse(date),
        }
    }

    #[test]
    fn test_empty_ledger_has_no_data_on_any_day() {
        let series = weekly_calories(&[]);
        assert!(series.is_empty());
        assert_eq!(series.values(), &[None; 7]);
        assert_eq!(series.points().len(), 7);
    }

    #[test]
    fn test_same_weekday_across_weeks_is_summed() {
        let series = weekly_calories(&[entry("2024-01-01", 300.0), entry("2024-01-08", 200.0)]);

        assert_eq!(series.get(Weekday::Mon), Some(500.0));
        for day in &WEEK_ORDER[1..] {
            assert_eq!(series.get(*day), None, "{day:?} should have no data");
        }
    }

    #[test]
    fn test_zero_calorie_day_differs_from_rest_day() {
        let series = weekly_calories(&[entry("2024-01-02", 0.0)]);
        assert_eq!(series.get(Weekday::Tue), Some(0.0));
        assert_eq!(series.get(Weekday::Wed), None);
    }

    #[test]
    fn test_unrecognized_dates_are_excluded() {
        let series = weekly_calories(&[entry("not a date", 900.0), entry("2024-01-07", 120.0)]);
        assert_eq!(series.get(Weekday::Sun), Some(120.0));
        assert_eq!(series.days_with_data(), 1);
        assert!((series.total() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_points_follow_monday_first_order() {
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let series = weekly_calories(&[WorkoutEntry::new("Swim", "Cardio", 45.0, 410.0, wednesday)]);
        let days: Vec<&str> = series.points().iter().map(|p| p.day).collect();
        assert_eq!(
            days,
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
        assert_eq!(series.points()[2].calories, Some(410.0));
    }

    #[test]
    fn test_series_serializes_missing_days_as_null() {
        let series = weekly_calories(&[entry("2024-01-05", 250.0)]);
        let json = serde_json::to_value(series).unwrap();
        assert_eq!(json[4]["day"], "Friday");
        assert_eq!(json[4]["calories"], 250.0);
        assert!(json[0]["calories"].is_null());
    }
}
