// ABOUTME: Configuration error types for body-composition config validation
// ABOUTME: Defines error variants for invalid ranges, parse failures and bad adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for body-composition config validation.

use bioscan_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., negative deadband)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Scoring adjustment has the wrong sign (bonus below zero, penalty above zero)
    #[error("Invalid adjustment: {0}")]
    InvalidAdjustment(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
