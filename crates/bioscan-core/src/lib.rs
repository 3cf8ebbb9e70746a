// ABOUTME: Core types and constants for the Bioscan body-composition library
// ABOUTME: Foundation crate with error handling, measurement models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bioscan Core
//!
//! Foundation crate providing shared types and constants for the Bioscan
//! body-composition evaluator. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Physiological thresholds and labels organized by domain
//! - **models**: Measurement snapshots (`BodyMeasurement`, `Sex`, `SegmentalAnalysis`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`BodyMeasurement`, `Sex`, segmental breakdown)
pub mod models;
