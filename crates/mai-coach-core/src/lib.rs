// ABOUTME: Core types and constants for the mAI Coach workout assistant
// ABOUTME: Foundation crate with error handling, profile and workout models, and storage constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # mAI Coach Core
//!
//! Foundation crate providing shared types and constants for the mAI Coach
//! workout assistant. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage file names, ledger column names and coach prompts
//! - **models**: Training profile and workout ledger entries

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Profile`, `WorkoutEntry`, `EntryDate`)
pub mod models;
