// ABOUTME: Coach commands for mai-coach
// ABOUTME: Workout plan generation and a line-oriented chat loop on stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mai_coach::{
    config::CoachConfig,
    errors::{AppError, AppResult, ErrorCode},
    llm::{prompts::greeting, OpenAiCompatibleProvider},
    session::{generate_workout_plan, ConversationSession, TurnOutcome},
    storage::{ProfileStore, StoredProfile},
};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

type Result<T> = AppResult<T>;

/// Typed at the prompt to resend the last unanswered message
const RETRY_COMMAND: &str = "/retry";

fn provider(config: &CoachConfig) -> Result<OpenAiCompatibleProvider> {
    if config.llm.api_key.is_none() && config.llm.provider_name == "openai" {
        warn!("OPENAI_API_KEY is not set; requests to the hosted endpoint will be rejected");
    }
    OpenAiCompatibleProvider::new(config.llm.clone())
}

/// Print a workout plan for the saved profile
pub async fn plan(config: &CoachConfig) -> Result<()> {
    let StoredProfile::Present(profile) = ProfileStore::from_config(&config.storage).load() else {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "No profile saved yet. Run `mai-coach profile set` first.",
        ));
    };

    let provider = provider(config)?;
    let plan = generate_workout_plan(&provider, &profile).await?;
    println!("{plan}");
    Ok(())
}

/// Run a chat until stdin closes
pub async fn chat(config: &CoachConfig) -> Result<()> {
    let provider = provider(config)?;
    let mut session = ConversationSession::with_config(config.session);
    info!(session_id = %session.id(), "Chat started");

    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    stdout.write_all(format!("{}\n> ", greeting()).as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let outcome = if line.trim() == RETRY_COMMAND && session.has_unanswered_message() {
            session.retry(&provider).await?
        } else {
            session.submit(&line, &provider).await?
        };

        let text = match &outcome {
            TurnOutcome::Ignored => String::new(),
            TurnOutcome::Reply(reply) => format!("{reply}\n"),
            TurnOutcome::Fallback { notice, .. } => {
                format!("{notice} (type {RETRY_COMMAND} to try again)\n")
            }
        };
        stdout.write_all(format!("{text}> ").as_bytes()).await?;
        stdout.flush().await?;
    }

    stdout.write_all(b"\n").await?;
    info!(
        session_id = %session.id(),
        messages = session.history().len(),
        "Chat ended"
    );
    Ok(())
}
