// ABOUTME: Body-composition intelligence engine for bioimpedance measurements
// ABOUTME: Reference resolution, metric evaluation, composite scoring and history trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bioscan Intelligence
//!
//! Evaluates "InBody-style" body-composition scans. Every operation is a
//! deterministic, side-effect-free transformation of caller-supplied data;
//! nothing is cached or persisted.
//!
//! ## Modules
//!
//! - **body**: reference ranges, metric evaluation, composite score,
//!   interpretations, history comparison and full reports
//! - **config**: tunable scoring adjustments, trend deadband and segmental tolerance

/// Body-composition evaluator
pub mod body;

/// Evaluator configuration with environment overrides
pub mod config;

pub use body::{
    calculate_bmi, calculate_body_summary, calculate_score, compare_measurements,
    evaluate_history, evaluate_measurement, evaluate_metric, get_references, score_category,
    segmental_balance, AgeBand, BodyReport, BodySummary, DemographicBracket,
    MeasurementComparison, MetricDirection, MetricEvaluation, MetricEvaluations, MetricRange,
    MetricStatus, MetricTrend, ReferenceRanges, ReferenceSet, Score, ScoreCategory, ScoreInputs,
    SegmentalBalance, Trend, FALLBACK_BRACKET,
};
pub use body::interpretation::{
    bmi_interpretation, body_fat_interpretation, visceral_fat_interpretation, BmiClass,
    BodyFatClass, ColorToken, Interpretation, VisceralFatClass,
};
pub use config::{BodyCompositionConfig, ScoringConfig, SegmentalConfig, TrendConfig};
