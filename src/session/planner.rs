// ABOUTME: One-shot workout plan generation from the saved training profile
// ABOUTME: Sends a planner prompt to the model without touching any conversation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mai_coach_core::models::Profile;
use tracing::{info, warn};

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::prompts::workout_plan_request;
use crate::llm::LlmProvider;

/// Ask the model for a workout plan tailored to `profile`
///
/// # Errors
///
/// Returns a missing-field error when the profile has no goal or experience
/// level, and the provider's error when the model call fails.
pub async fn generate_workout_plan(
    provider: &dyn LlmProvider,
    profile: &Profile,
) -> AppResult<String> {
    if !profile.is_complete() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "Save a goal and an experience level before asking for a plan",
        ));
    }

    let request = workout_plan_request(profile);
    match provider.complete(&request).await {
        Ok(response) => {
            info!(provider = provider.name(), model = %response.model, "Workout plan generated");
            Ok(response.content)
        }
        Err(error) => {
            warn!(provider = provider.name(), error = %error, "Workout plan request failed");
            Err(error)
        }
    }
}
