// ABOUTME: Core data models for body-composition measurements
// ABOUTME: Re-exports BodyMeasurement, Sex and segmental breakdown structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Measurements are owned by the caller and treated as read-only input by the
//! evaluator. All models support JSON serialization so that snapshots fetched
//! from the hosted data store can be passed straight through.

mod measurement;
mod segmental;

pub use measurement::{BodyMeasurement, Sex};
pub use segmental::{SegmentReading, SegmentalAnalysis};
