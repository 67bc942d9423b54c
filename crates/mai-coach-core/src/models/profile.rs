// ABOUTME: Training profile model persisted as a single JSON record
// ABOUTME: Holds the user's free-text goal and experience level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// The user's training profile
///
/// One record per installation. Both fields are free text and may be empty;
/// missing keys in the stored record deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// What the user wants to achieve (e.g. "build muscle")
    #[serde(default)]
    pub goal: String,
    /// Self-described experience level (e.g. "beginner")
    #[serde(default)]
    pub experience_level: String,
}

impl Profile {
    /// Create a profile from its two fields
    #[must_use]
    pub fn new(goal: impl Into<String>, experience_level: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            experience_level: experience_level.into(),
        }
    }

    /// Whether both fields are filled in
    ///
    /// Shells show the saved summary for a complete profile and the input
    /// form otherwise.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.goal.trim().is_empty() && !self.experience_level.trim().is_empty()
    }
}
