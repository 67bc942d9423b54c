// ABOUTME: Core data models for the mAI Coach workout assistant
// ABOUTME: Re-exports the training profile and workout ledger entry types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - [`Profile`]: the singleton training profile (goal, experience level)
//! - [`WorkoutEntry`]: one row of the append-only workout ledger
//! - [`EntryDate`]: a ledger date that may not be a recognizable calendar date

mod profile;
mod workout;

pub use profile::Profile;
pub use workout::{EntryDate, WorkoutEntry};
