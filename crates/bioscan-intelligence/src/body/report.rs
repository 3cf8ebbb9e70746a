// ABOUTME: Full evaluation report of one measurement and parallel batch evaluation
// ABOUTME: Combines references, per-metric evaluations, score, interpretations and segmental balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bioscan_core::errors::AppResult;
use bioscan_core::models::BodyMeasurement;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::evaluation::{evaluate_metric, MetricDirection, MetricEvaluation};
use super::interpretation::{
    bmi_interpretation, body_fat_interpretation, visceral_fat_interpretation, BmiClass,
    BodyFatClass, Interpretation, VisceralFatClass,
};
use super::references::{get_references, DemographicBracket};
use super::score::{calculate_score, Score, ScoreInputs};
use super::segmental::{segmental_balance, SegmentalBalance};
use crate::config::BodyCompositionConfig;

/// Evaluation of every metric of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricEvaluations {
    /// Body weight
    pub weight: MetricEvaluation,
    /// Skeletal muscle mass
    pub skeletal_muscle_mass: MetricEvaluation,
    /// Body fat mass
    pub body_fat_mass: MetricEvaluation,
    /// Body fat percentage
    pub body_fat_percent: MetricEvaluation,
    /// Body mass index
    pub bmi: MetricEvaluation,
    /// Visceral fat level
    pub visceral_fat: MetricEvaluation,
    /// Basal metabolic rate
    pub basal_metabolic_rate: MetricEvaluation,
    /// Total body water, when the scan reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_body_water: Option<MetricEvaluation>,
}

/// Everything the evaluator derives from one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyReport {
    /// Date of the scan
    pub measured_on: NaiveDate,
    /// Bracket derived from the measurement's age and sex
    pub requested_bracket: DemographicBracket,
    /// Bracket whose ranges were used
    pub resolved_bracket: DemographicBracket,
    /// Ranges were borrowed from another bracket
    pub approximate_references: bool,
    /// Per-metric evaluations
    pub metrics: MetricEvaluations,
    /// Composite score
    pub score: Score,
    /// Visceral fat interpretation
    pub visceral_fat: Interpretation<VisceralFatClass>,
    /// BMI interpretation
    pub bmi: Interpretation<BmiClass>,
    /// Body fat percentage interpretation
    pub body_fat: Interpretation<BodyFatClass>,
    /// Limb balance, when the scan carries a segmental breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segmental: Option<SegmentalBalance>,
}

/// Evaluate one measurement
///
/// # Errors
///
/// Returns `InvalidInput` when the measurement fails validation
pub fn evaluate_measurement(
    measurement: &BodyMeasurement,
    config: &BodyCompositionConfig,
) -> AppResult<BodyReport> {
    measurement.validate()?;

    let references = get_references(measurement.age, measurement.sex)?;
    let ranges = &references.ranges;
    let higher = MetricDirection::HigherIsBetter;
    let lower = MetricDirection::LowerIsBetter;
    let target = MetricDirection::TargetBand;

    let metrics = MetricEvaluations {
        weight: evaluate_metric(measurement.weight_kg, &ranges.weight, target)?,
        skeletal_muscle_mass: evaluate_metric(
            measurement.skeletal_muscle_mass_kg,
            &ranges.skeletal_muscle_mass,
            higher,
        )?,
        body_fat_mass: evaluate_metric(measurement.body_fat_mass_kg, &ranges.body_fat_mass, lower)?,
        body_fat_percent: evaluate_metric(
            measurement.body_fat_percent,
            &ranges.body_fat_percent,
            lower,
        )?,
        bmi: evaluate_metric(measurement.bmi, &ranges.bmi, target)?,
        visceral_fat: evaluate_metric(
            measurement.visceral_fat_level,
            &ranges.visceral_fat,
            lower,
        )?,
        basal_metabolic_rate: evaluate_metric(
            measurement.basal_metabolic_rate_kcal,
            &ranges.basal_metabolic_rate,
            higher,
        )?,
        total_body_water: measurement
            .total_body_water_l
            .map(|water| evaluate_metric(water, &ranges.total_body_water, higher))
            .transpose()?,
    };

    let score = calculate_score(&ScoreInputs::from(measurement), &config.scoring)?;
    let segmental = measurement
        .segmental
        .as_ref()
        .map(|analysis| segmental_balance(analysis, &config.segmental))
        .transpose()?;

    debug!(
        measured_on = %measurement.measured_on,
        points = score.points(),
        approximate_references = references.approximate,
        "Evaluated measurement"
    );

    Ok(BodyReport {
        measured_on: measurement.measured_on,
        requested_bracket: references.requested,
        resolved_bracket: references.resolved,
        approximate_references: references.approximate,
        metrics,
        score,
        visceral_fat: visceral_fat_interpretation(measurement.visceral_fat_level)?,
        bmi: bmi_interpretation(measurement.bmi)?,
        body_fat: body_fat_interpretation(measurement.body_fat_percent, measurement.age)?,
        segmental,
    })
}

/// Evaluate a batch of measurements in parallel, preserving input order
///
/// # Errors
///
/// Returns the first error encountered when any measurement fails validation
pub fn evaluate_history(
    measurements: &[BodyMeasurement],
    config: &BodyCompositionConfig,
) -> AppResult<Vec<BodyReport>> {
    measurements
        .par_iter()
        .map(|measurement| evaluate_measurement(measurement, config))
        .collect()
}
