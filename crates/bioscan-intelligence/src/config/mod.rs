// ABOUTME: Configuration module for bioscan-intelligence crate
// ABOUTME: Re-exports body-composition configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body-composition configuration (scoring, trends, segmental balance)
pub mod intelligence;

pub use intelligence::{
    BodyCompositionConfig, ConfigError, ScoringConfig, SegmentalConfig, TrendConfig,
};
