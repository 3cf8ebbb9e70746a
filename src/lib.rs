// ABOUTME: Main library entry point for the Bioscan body-composition toolkit
// ABOUTME: Re-exports the core and intelligence crates and provides logging and JSON input helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bioscan
//!
//! Evaluation of bioimpedance ("InBody-style") body-composition scans.
//!
//! ## Features
//!
//! - **Reference ranges**: demographic ideal bands per metric, with a flagged fallback
//! - **Metric evaluation**: status and percentile-within-band for every scanned value
//! - **Composite score**: 0-100 wellness score with categories
//! - **Interpretations**: visceral fat, BMI and body fat percentage labels
//! - **History**: scan-to-scan comparison and month/total trend summaries
//! - **Segmental balance**: limb lean-mass asymmetry
//!
//! ## Architecture
//!
//! - **`bioscan-core`**: errors, models and constants
//! - **`bioscan-intelligence`**: the evaluator and its configuration
//! - **this crate**: logging setup, JSON input helpers and the `bioscan-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use bioscan::intelligence::{calculate_score, ScoreInputs, ScoringConfig};
//! use bioscan::models::Sex;
//!
//! # fn main() -> bioscan::errors::AppResult<()> {
//! let inputs = ScoreInputs {
//!     weight_kg: 82.1,
//!     muscle_mass_kg: 38.5,
//!     fat_percent: 17.3,
//!     visceral_fat_level: 7.0,
//!     age: 44,
//!     sex: Sex::Male,
//! };
//! let score = calculate_score(&inputs, &ScoringConfig::default())?;
//! assert!(score.points() <= 100);
//! # Ok(())
//! # }
//! ```

/// Application constants (score bands, interpretation thresholds)
pub use bioscan_core::constants;

/// Unified error handling system with standard error codes
pub use bioscan_core::errors;

/// Measurement data models
pub use bioscan_core::models;

/// Body-composition evaluator
pub use bioscan_intelligence as intelligence;

/// Reading measurements from JSON documents
pub mod input;

/// Production logging and structured output
pub mod logging;
