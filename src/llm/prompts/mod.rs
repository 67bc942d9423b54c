// ABOUTME: Fixed prompts and notices used when talking to the language model
// ABOUTME: Coach system prompt, greeting, fallback notice and the workout plan request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Texts shown to the model or the user by the coaching session and the
//! workout planner. The values live in `mai_coach_core::constants::coach` so
//! shells that do not link the LLM layer can still show them.

use mai_coach_core::constants::coach::{
    FALLBACK_REPLY, GREETING, PLANNER_SYSTEM_PROMPT, SYSTEM_PROMPT,
};
use mai_coach_core::models::Profile;

use super::{ChatMessage, ChatRequest};

/// System prompt that opens every coaching conversation
#[must_use]
pub const fn coach_system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Greeting shown by shells before the first turn
#[must_use]
pub const fn greeting() -> &'static str {
    GREETING
}

/// Notice returned in place of a reply when the model call fails
#[must_use]
pub const fn fallback_reply() -> &'static str {
    FALLBACK_REPLY
}

/// User message asking for a plan tailored to the profile
#[must_use]
pub fn workout_plan_prompt(profile: &Profile) -> String {
    format!(
        "Create a workout plan for a {} user who wants to {}.",
        profile.experience_level.trim(),
        profile.goal.trim()
    )
}

/// One-shot workout plan request for the given profile
#[must_use]
pub fn workout_plan_request(profile: &Profile) -> ChatRequest {
    ChatRequest::new(vec![
        ChatMessage::system(PLANNER_SYSTEM_PROMPT),
        ChatMessage::user(workout_plan_prompt(profile)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;

    #[test]
    fn test_workout_plan_prompt_uses_profile_fields() {
        let profile = Profile::new("lose weight", "beginner");
        assert_eq!(
            workout_plan_prompt(&profile),
            "Create a workout plan for a beginner user who wants to lose weight."
        );
    }

    #[test]
    fn test_workout_plan_request_has_planner_system_message() {
        let request = workout_plan_request(&Profile::new("run a 10k", "intermediate"));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[0].content, PLANNER_SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, MessageRole::User);
    }
}
