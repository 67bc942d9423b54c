// ABOUTME: Configuration management module for storage, session and model settings
// ABOUTME: Environment-only configuration; there are no configuration files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for mAI Coach
//!
//! - **Environment**: data directory, context window and model endpoint from
//!   environment variables

/// Environment configuration
pub mod environment;

pub use environment::{CoachConfig, ConfigError, SessionConfig, StorageConfig};
