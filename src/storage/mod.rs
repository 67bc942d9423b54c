// ABOUTME: File-backed persistence for the training profile and the workout ledger
// ABOUTME: Both stores report absence and schema problems as values, not panics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! - [`ProfileStore`]: one JSON record, replaced wholesale on save
//! - [`WorkoutLedger`]: header-first, append-only CSV file
//!
//! Neither store locks its file. A second process writing the same ledger at
//! the same time can interleave rows.

mod profile_store;
mod workout_ledger;

pub use profile_store::{Absence, ProfileStore, StoredProfile};
pub use workout_ledger::{LedgerError, LedgerSnapshot, RowPolicy, SkippedRow, WorkoutLedger};
