// ABOUTME: Environment configuration for storage location and conversation context limits
// ABOUTME: Parses MAI_COACH_* variables into typed settings with validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use mai_coach_core::constants::storage::{APP_DIR_NAME, LEDGER_FILE, PROFILE_FILE};
use mai_coach_core::errors::{AppError, ErrorCode};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::llm::OpenAiCompatibleConfig;

/// Directory holding the profile record and the workout ledger
pub const DATA_DIR_ENV: &str = "MAI_COACH_DATA_DIR";

/// Optional cap on messages sent as model context
pub const MAX_CONTEXT_MESSAGES_ENV: &str = "MAI_COACH_MAX_CONTEXT_MESSAGES";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let ConfigError::InvalidValue { key, .. } = &error;
        let details = serde_json::json!({ "key": key });
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_details(details)
    }
}

/// Where durable state lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Data directory
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Storage rooted at `data_dir`
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the data directory from the environment
    ///
    /// `MAI_COACH_DATA_DIR` wins; otherwise the platform local data directory,
    /// falling back to the working directory when the platform has none.
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);
        Self { data_dir }
    }

    /// Path of the profile record
    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_FILE)
    }

    /// Path of the workout ledger
    #[must_use]
    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(LEDGER_FILE)
    }

    /// Data directory
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(APP_DIR_NAME))
}

/// Conversation session settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of non-system messages sent as context; `None` sends all
    pub max_context_messages: Option<usize>,
}

impl SessionConfig {
    /// Parse session settings from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if `MAI_COACH_MAX_CONTEXT_MESSAGES` is set but is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_context_messages = match env::var(MAX_CONTEXT_MESSAGES_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_positive(MAX_CONTEXT_MESSAGES_ENV, &raw)?),
            _ => None,
        };
        Ok(Self {
            max_context_messages,
        })
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            key,
            reason: "must be greater than zero".to_owned(),
        }),
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::InvalidValue {
            key,
            reason: e.to_string(),
        }),
    }
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// Storage locations
    pub storage: StorageConfig,
    /// Conversation settings
    pub session: SessionConfig,
    /// Language-model endpoint
    pub llm: OpenAiCompatibleConfig,
}

impl CoachConfig {
    /// Load the whole configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            storage: StorageConfig::from_env(),
            session: SessionConfig::from_env()?,
            llm: OpenAiCompatibleConfig::from_env(),
        };

        info!(
            data_dir = %config.storage.data_dir.display(),
            model = %config.llm.default_model,
            "Configuration loaded"
        );
        debug!(
            max_context_messages = ?config.session.max_context_messages,
            api_key_present = config.llm.api_key.is_some(),
            "Session and model settings"
        );

        Ok(config)
    }
}
