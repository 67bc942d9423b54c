// ABOUTME: Error types for the mAI Coach crate, re-exported from mai-coach-core
// ABOUTME: Keeps crate::errors paths stable for the storage, session and LLM layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! [`AppError`] and [`ErrorCode`] are defined in `mai-coach-core` so the
//! workspace crates share one taxonomy.

pub use mai_coach_core::errors::{AppError, AppResult, ErrorCode};
