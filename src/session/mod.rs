// ABOUTME: Coaching conversation and workout planning on top of the LLM provider
// ABOUTME: Session state is owned by the caller; nothing here is process-wide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coaching Session
//!
//! [`ConversationSession`] keeps the dialogue for one user and moves between
//! `Idle` and `AwaitingResponse`. The model call itself is a future; callers
//! may await [`ConversationSession::submit`] directly or pair
//! [`ConversationSession::begin_turn`] with
//! [`ConversationSession::complete_turn`] and run the request wherever they like.

mod conversation;
mod planner;

pub use conversation::{ConversationSession, SessionState, TurnOutcome};
pub use planner::generate_workout_plan;
