// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage file names, ledger schema, and fixed coach texts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by the component that owns them.

/// File names inside the data directory
pub mod storage {
    /// Profile record (single JSON object)
    pub const PROFILE_FILE: &str = "user_data.json";
    /// Workout ledger (CSV, header-first, append-only)
    pub const LEDGER_FILE: &str = "wrkoutData.csv";
    /// Directory name used under the platform data dir
    pub const APP_DIR_NAME: &str = "mai-coach";
}

/// Workout ledger column schema
pub mod ledger {
    /// Workout name column
    pub const COL_NAME: &str = "Name";
    /// Workout type column
    pub const COL_TYPE: &str = "Type";
    /// Duration column (minutes, as entered)
    pub const COL_DURATION: &str = "Duration";
    /// Calories burned column (as entered)
    pub const COL_CALORIES: &str = "Calories Burned";
    /// Calendar date column
    pub const COL_DATE: &str = "Date";

    /// Header row, in write order
    pub const HEADER: [&str; 5] = [COL_NAME, COL_TYPE, COL_DURATION, COL_CALORIES, COL_DATE];

    /// Date format written to the `Date` column
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Fixed texts used by the coaching session
pub mod coach {
    /// System prompt inserted at the start of every conversation
    pub const SYSTEM_PROMPT: &str = "You are mAI Coach, a personal training assistant.";
    /// Greeting the shell shows before the first turn
    pub const GREETING: &str = "Hello, I'm mAI Coach, your personal training assistant!";
    /// Notice returned in place of an assistant reply when the model call fails
    pub const FALLBACK_REPLY: &str = "Sorry, I couldn't fetch a response.";
    /// System prompt for one-shot workout plan requests
    pub const PLANNER_SYSTEM_PROMPT: &str =
        "You are a personal trainer helping users with workouts.";
    /// Default chat model
    pub const DEFAULT_MODEL: &str = "gpt-4-turbo";
}

/// Chart labels handed to the charting collaborator
pub mod chart {
    /// Figure title
    pub const TITLE: &str = "Calories Burned Per Day";
    /// X axis label
    pub const X_LABEL: &str = "Day";
    /// Y axis label
    pub const Y_LABEL: &str = "Calories";
}
