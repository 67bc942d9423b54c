// ABOUTME: Main library entry point for the mAI Coach personal training assistant
// ABOUTME: Wires profile storage, the workout ledger, weekly reports and the LLM coaching session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # mAI Coach
//!
//! Core of a single-user personal training assistant:
//!
//! - **Profile**: goal and experience level, stored as one JSON record
//! - **Workout ledger**: append-only CSV of logged workouts
//! - **Weekly report**: calories summed per weekday, Monday first
//! - **Coaching session**: a conversation with an OpenAI-compatible model
//!
//! Presentation is left to shells; the `mai-coach` binary is a small
//! command-line one.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mai_coach::config::CoachConfig;
//! use mai_coach::errors::AppResult;
//! use mai_coach::reporting::{weekly_report, WeeklyReport};
//! use mai_coach::storage::WorkoutLedger;
//!
//! fn main() -> AppResult<()> {
//!     let config = CoachConfig::from_env()?;
//!     let ledger = WorkoutLedger::from_config(&config.storage);
//!
//!     if let WeeklyReport::Series { series, .. } = weekly_report(&ledger)? {
//!         println!("{} calories this week", series.total());
//!     }
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Language-model providers and prompts
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Weekly calorie report
pub mod reporting;

/// Coaching conversation and workout planning
pub mod session;

/// Profile and workout ledger persistence
pub mod storage;

pub use mai_coach_core::constants;
pub use mai_coach_core::models;
pub use mai_coach_intelligence as intelligence;
