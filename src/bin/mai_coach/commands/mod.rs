// ABOUTME: Re-exports command modules for mai-coach
// ABOUTME: Profile, workout log/report and coach (plan, chat) commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod coach;
pub mod profile;
pub mod workout;
