// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted LLM provider, temporary storage and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `mai_coach`

use async_trait::async_trait;
use chrono::NaiveDate;
use mai_coach::config::StorageConfig;
use mai_coach::errors::AppError;
use mai_coach::llm::{ChatRequest, ChatResponse, LlmProvider};
use std::collections::VecDeque;
use std::sync::{Mutex, Once};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok(_) | Err(_) => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Storage rooted in a fresh temporary directory
///
/// Keep the returned `TempDir` alive for as long as the storage is used.
pub fn temp_storage() -> (TempDir, StorageConfig) {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let storage = StorageConfig::new(dir.path());
    (dir, storage)
}

/// Calendar date shorthand
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Provider that answers from a script and records every request
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<ChatResponse, AppError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<ChatResponse, AppError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider whose every call answers with `text`
    pub fn replying(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|text| Ok(ChatResponse::text(*text, "scripted")))
                .collect(),
        )
    }

    /// Provider whose next call fails
    pub fn failing() -> Self {
        Self::new(vec![Err(AppError::external_unavailable(
            "LLM",
            "connection refused",
        ))])
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("script exhausted")))
    }
}
