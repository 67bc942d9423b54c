// ABOUTME: mai-coach - command-line shell for the mAI Coach training assistant
// ABOUTME: Manages the profile, logs workouts, prints weekly reports and runs coaching chats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Save the training profile
//! mai-coach profile set --goal "build muscle" --experience-level beginner
//!
//! # Log a workout for today
//! mai-coach log --name "Morning run" --type Cardio --duration 30 --calories 300
//!
//! # Calories per weekday
//! mai-coach report
//!
//! # Ask for a workout plan, or chat with the coach
//! mai-coach plan
//! mai-coach chat
//! ```

mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mai_coach::{
    config::CoachConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
};
use std::path::PathBuf;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "mai-coach",
    about = "mAI Coach personal training assistant",
    long_about = "Keep a training profile and a workout log, see calories per weekday, and talk to an AI coach."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to MAI_COACH_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Training profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Log a workout
    Log {
        /// Workout name
        #[arg(long)]
        name: String,

        /// Workout type (e.g. Cardio, Strength)
        #[arg(long = "type")]
        workout_type: String,

        /// Duration in minutes
        #[arg(long)]
        duration: f64,

        /// Calories burned
        #[arg(long)]
        calories: f64,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show calories burned per weekday
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the coach for a workout plan based on the saved profile
    Plan,

    /// Chat with the coach (one message per line, Ctrl-D to quit)
    Chat,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the saved profile
    Show,

    /// Save a new profile
    Set {
        /// Training goal
        #[arg(long)]
        goal: String,

        /// Experience level
        #[arg(long)]
        experience_level: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let mut config = CoachConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }

    match cli.command {
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(&config),
            ProfileCommand::Set {
                goal,
                experience_level,
            } => commands::profile::set(&config, &goal, &experience_level),
        },
        Command::Log {
            name,
            workout_type,
            duration,
            calories,
            date,
        } => commands::workout::log(&config, name, workout_type, duration, calories, date),
        Command::Report { json } => commands::workout::report(&config, json),
        Command::Plan => commands::coach::plan(&config).await,
        Command::Chat => commands::coach::chat(&config).await,
    }
}
