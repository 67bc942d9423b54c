// ABOUTME: Conversation session holding the ordered coaching dialogue and its turn state
// ABOUTME: Splits each turn into request building and result recording around the model call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::prompts::{coach_system_prompt, fallback_reply};
use crate::llm::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, MessageRole};

/// Where the session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready for the next user message
    Idle,
    /// A request has been handed out and its result not yet recorded
    AwaitingResponse,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::AwaitingResponse => f.write_str("awaiting_response"),
        }
    }
}

/// Result of one conversation turn
#[derive(Debug)]
pub enum TurnOutcome {
    /// The submitted text was empty; nothing happened
    Ignored,
    /// The model answered; the reply is now in the history
    Reply(String),
    /// The model call failed; show `notice` instead of a reply
    Fallback {
        /// Fixed text for the user
        notice: &'static str,
        /// The failure, for callers that want to surface or log it
        error: AppError,
    },
}

impl TurnOutcome {
    /// Text to show the user, if any
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        match self {
            Self::Ignored => None,
            Self::Reply(text) => Some(text.as_str()),
            Self::Fallback { notice, .. } => Some(*notice),
        }
    }

    /// Whether the turn ended in the fallback notice
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// One user's coaching conversation
///
/// The history starts with the coach system message and then alternates
/// user and assistant messages. A failed model call leaves the user message
/// in place without an answer; [`retry`](Self::retry) resends it and a new
/// submission replaces it.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: Uuid,
    history: Vec<ChatMessage>,
    state: SessionState,
    config: SessionConfig,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    /// Session with unbounded context
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Session with the given settings
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        let id = Uuid::new_v4();
        debug!(session_id = %id, ?config, "Conversation session started");
        Self {
            id,
            history: vec![ChatMessage::system(coach_system_prompt())],
            state: SessionState::Idle,
            config,
        }
    }

    /// Session identifier used in logs
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Full ordered history, system message first
    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Current turn state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the last message is a user message with no answer
    #[must_use]
    pub fn has_unanswered_message(&self) -> bool {
        self.history
            .last()
            .is_some_and(|message| message.role == MessageRole::User)
    }

    /// Record a user message and build the request for it
    ///
    /// Returns `Ok(None)` for empty or whitespace-only text, leaving the
    /// session untouched. An unanswered user message from a failed turn is
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns a busy error while a previous request is still outstanding.
    pub fn begin_turn(&mut self, text: &str) -> AppResult<Option<ChatRequest>> {
        self.ensure_idle()?;

        let text = text.trim();
        if text.is_empty() {
            debug!(session_id = %self.id, "Ignoring empty message");
            return Ok(None);
        }

        if self.has_unanswered_message() {
            self.history.pop();
            debug!(session_id = %self.id, "Replacing unanswered message");
        }

        self.history.push(ChatMessage::user(text));
        self.state = SessionState::AwaitingResponse;
        Ok(Some(self.build_request()))
    }

    /// Record the result of the request handed out by [`begin_turn`](Self::begin_turn)
    ///
    /// A successful reply is appended to the history. A failure appends
    /// nothing and yields the fallback notice.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if no request is outstanding.
    pub fn complete_turn(
        &mut self,
        result: Result<ChatResponse, AppError>,
    ) -> AppResult<TurnOutcome> {
        if self.state != SessionState::AwaitingResponse {
            return Err(AppError::invalid_input(
                "No conversation turn is awaiting a response",
            ));
        }
        self.state = SessionState::Idle;

        match result {
            Ok(response) => {
                info!(
                    session_id = %self.id,
                    model = %response.model,
                    chars = response.content.len(),
                    "Coach replied"
                );
                self.history
                    .push(ChatMessage::assistant(response.content.clone()));
                Ok(TurnOutcome::Reply(response.content))
            }
            Err(error) => {
                warn!(
                    session_id = %self.id,
                    code = ?error.code,
                    error = %error,
                    "Model call failed; returning fallback notice"
                );
                Ok(TurnOutcome::Fallback {
                    notice: fallback_reply(),
                    error,
                })
            }
        }
    }

    /// Drop an outstanding request whose result will never arrive
    ///
    /// The user message stays in the history and can be retried. Returns
    /// whether a request was outstanding.
    pub fn abandon_turn(&mut self) -> bool {
        let was_waiting = self.state == SessionState::AwaitingResponse;
        if was_waiting {
            warn!(session_id = %self.id, "Abandoning outstanding model request");
            self.state = SessionState::Idle;
        }
        was_waiting
    }

    /// Submit a user message and wait for the model's answer
    ///
    /// # Errors
    ///
    /// Returns a busy error while a previous request is still outstanding.
    /// Model failures are not errors; they come back as
    /// [`TurnOutcome::Fallback`].
    pub async fn submit(
        &mut self,
        text: &str,
        provider: &dyn LlmProvider,
    ) -> AppResult<TurnOutcome> {
        let Some(request) = self.begin_turn(text)? else {
            return Ok(TurnOutcome::Ignored);
        };
        self.dispatch(&request, provider).await
    }

    /// Resend the unanswered user message left by a failed turn
    ///
    /// # Errors
    ///
    /// Returns a busy error while a request is outstanding, and an
    /// invalid-input error when there is nothing to retry.
    pub async fn retry(&mut self, provider: &dyn LlmProvider) -> AppResult<TurnOutcome> {
        self.ensure_idle()?;
        if !self.has_unanswered_message() {
            return Err(AppError::invalid_input("There is no unanswered message to retry"));
        }

        debug!(session_id = %self.id, "Retrying unanswered message");
        self.state = SessionState::AwaitingResponse;
        let request = self.build_request();
        self.dispatch(&request, provider).await
    }

    async fn dispatch(
        &mut self,
        request: &ChatRequest,
        provider: &dyn LlmProvider,
    ) -> AppResult<TurnOutcome> {
        debug!(
            session_id = %self.id,
            provider = provider.name(),
            messages = request.messages.len(),
            "Dispatching conversation turn"
        );
        let result = provider.complete(request).await;
        self.complete_turn(result)
    }

    fn ensure_idle(&self) -> AppResult<()> {
        if self.state == SessionState::AwaitingResponse {
            return Err(AppError::busy(
                "A response is still pending for the previous message",
            ));
        }
        Ok(())
    }

    /// Request carrying the system message plus the context window
    fn build_request(&self) -> ChatRequest {
        let (system, dialogue) = self.history.split_at(1);

        let mut window = match self.config.max_context_messages {
            Some(limit) if dialogue.len() > limit => &dialogue[dialogue.len() - limit..],
            _ => dialogue,
        };
        while window
            .first()
            .is_some_and(|message| message.role != MessageRole::User)
        {
            window = &window[1..];
        }

        let mut messages = Vec::with_capacity(1 + window.len());
        messages.extend_from_slice(system);
        messages.extend_from_slice(window);
        ChatRequest::new(messages)
    }
}
