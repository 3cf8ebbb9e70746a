// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for bioscan-cli
// ABOUTME: Provides access to single-scan and history commands

pub mod body;
pub mod history;
