// ABOUTME: Body-composition evaluator module organization
// ABOUTME: References, metric evaluation, score, interpretations, history and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body-composition evaluation
//!
//! All operations are pure functions of their inputs. Reference ranges are a
//! static table; brackets without published ranges fall back to male 40-59
//! and the result is flagged as approximate.

mod evaluation;
mod history;
/// Fixed-threshold interpretations (visceral fat, BMI, body fat)
pub mod interpretation;
mod references;
mod report;
mod score;
mod segmental;

pub use evaluation::{evaluate_metric, MetricDirection, MetricEvaluation, MetricStatus};
pub use history::{
    calculate_body_summary, compare_measurements, BodySummary, MeasurementComparison,
    MetricTrend, Trend,
};
pub use interpretation::calculate_bmi;
pub use references::{
    get_references, AgeBand, DemographicBracket, MetricRange, ReferenceRanges, ReferenceSet,
    FALLBACK_BRACKET,
};
pub use report::{evaluate_history, evaluate_measurement, BodyReport, MetricEvaluations};
pub use score::{calculate_score, score_category, Score, ScoreCategory, ScoreInputs};
pub use segmental::{segmental_balance, SegmentalBalance};
