// ABOUTME: Comparison of two measurements and trend summary over a measurement history
// ABOUTME: Signed deltas, month-over-month and total variations with a stable deadband
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bioscan_core::errors::{require_finite, AppResult};
use bioscan_core::models::BodyMeasurement;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::score::{calculate_score, ScoreInputs};
use crate::config::{ScoringConfig, TrendConfig};

/// Direction of a variation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Variation above the deadband
    Rising,
    /// Variation within the deadband
    #[default]
    Stable,
    /// Variation below the negative deadband
    Falling,
}

impl Trend {
    /// Classify a variation
    #[must_use]
    pub fn classify(variation: f64, deadband: f64) -> Self {
        if variation > deadband {
            Self::Rising
        } else if variation < -deadband {
            Self::Falling
        } else {
            Self::Stable
        }
    }
}

/// Signed changes from a previous to a current measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementComparison {
    /// Days between the two scans (negative when `current` is older)
    pub elapsed_days: i64,
    /// Weight change (kg)
    pub weight_kg: f64,
    /// Body fat mass change (kg)
    pub body_fat_mass_kg: f64,
    /// Body fat percentage change (percentage points)
    pub body_fat_percent: f64,
    /// Skeletal muscle mass change (kg)
    pub skeletal_muscle_mass_kg: f64,
    /// Body water change (L), when both scans report water
    pub total_body_water_l: Option<f64>,
    /// Score change (points)
    pub score: i32,
}

/// Compare two measurements
///
/// Deltas are `current - previous`, rounded to one decimal place. Scores use
/// the device-reported value when present and the composite score otherwise.
///
/// # Errors
///
/// Returns `InvalidInput` when either measurement fails validation
pub fn compare_measurements(
    previous: &BodyMeasurement,
    current: &BodyMeasurement,
    config: &ScoringConfig,
) -> AppResult<MeasurementComparison> {
    previous.validate()?;
    current.validate()?;

    let total_body_water_l = match (previous.total_body_water_l, current.total_body_water_l) {
        (Some(before), Some(after)) => Some(round_to_tenth(after - before)),
        _ => None,
    };

    let score = i32::from(effective_score(current, config)?)
        - i32::from(effective_score(previous, config)?);

    Ok(MeasurementComparison {
        elapsed_days: (current.measured_on - previous.measured_on).num_days(),
        weight_kg: round_to_tenth(current.weight_kg - previous.weight_kg),
        body_fat_mass_kg: round_to_tenth(current.body_fat_mass_kg - previous.body_fat_mass_kg),
        body_fat_percent: round_to_tenth(current.body_fat_percent - previous.body_fat_percent),
        skeletal_muscle_mass_kg: round_to_tenth(
            current.skeletal_muscle_mass_kg - previous.skeletal_muscle_mass_kg,
        ),
        total_body_water_l,
        score,
    })
}

/// Device score when reported, composite score otherwise
fn effective_score(measurement: &BodyMeasurement, config: &ScoringConfig) -> AppResult<u8> {
    match measurement.score {
        Some(points) => Ok(points),
        None => Ok(calculate_score(&ScoreInputs::from(measurement), config)?.points()),
    }
}

/// Month and total variation of one metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricTrend {
    /// Latest minus the month reference
    pub month_variation: f64,
    /// Classification of `month_variation`
    pub month_trend: Trend,
    /// Latest minus the first measurement
    pub total_variation: f64,
    /// Classification of `total_variation`
    pub total_trend: Trend,
}

impl MetricTrend {
    fn between(first: f64, month_reference: f64, latest: f64, deadband: f64) -> Self {
        let month_variation = round_to_tenth(latest - month_reference);
        let total_variation = round_to_tenth(latest - first);
        Self {
            month_variation,
            month_trend: Trend::classify(month_variation, deadband),
            total_variation,
            total_trend: Trend::classify(total_variation, deadband),
        }
    }
}

/// Trend summary over a measurement history
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BodySummary {
    /// Number of measurements summarized
    pub total_measurements: usize,
    /// Date of the oldest measurement
    pub first_measured_on: Option<NaiveDate>,
    /// Date of the newest measurement
    pub latest_measured_on: Option<NaiveDate>,
    /// Date of the measurement used as "one month ago"
    pub month_reference_on: Option<NaiveDate>,
    /// Weight
    pub weight: MetricTrend,
    /// Body fat percentage
    pub body_fat_percent: MetricTrend,
    /// Skeletal muscle mass
    pub skeletal_muscle_mass: MetricTrend,
}

/// Summarize a measurement history in any order
///
/// The list is sorted by date (stable for equal dates). The month reference is
/// the earlier measurement closest to `latest - month_window_days`, found by
/// scanning backwards from the newest; on a tie the more recent one wins. With
/// fewer than two measurements every variation is zero and every trend stable.
///
/// # Errors
///
/// Returns `InvalidInput` when a weight, fat percentage or muscle value is not finite
pub fn calculate_body_summary(
    measurements: &[BodyMeasurement],
    config: &TrendConfig,
) -> AppResult<BodySummary> {
    for measurement in measurements {
        require_finite("weight_kg", measurement.weight_kg)?;
        require_finite("body_fat_percent", measurement.body_fat_percent)?;
        require_finite("skeletal_muscle_mass_kg", measurement.skeletal_muscle_mass_kg)?;
    }

    let mut ordered: Vec<&BodyMeasurement> = measurements.iter().collect();
    ordered.sort_by_key(|m| m.measured_on);

    let (Some(first), Some(latest)) = (ordered.first(), ordered.last()) else {
        return Ok(BodySummary::default());
    };

    let mut summary = BodySummary {
        total_measurements: ordered.len(),
        first_measured_on: Some(first.measured_on),
        latest_measured_on: Some(latest.measured_on),
        ..BodySummary::default()
    };

    let Some(month_reference) = find_month_reference(&ordered, config.month_window_days) else {
        return Ok(summary);
    };

    let deadband = config.deadband;
    summary.month_reference_on = Some(month_reference.measured_on);
    summary.weight = MetricTrend::between(
        first.weight_kg,
        month_reference.weight_kg,
        latest.weight_kg,
        deadband,
    );
    summary.body_fat_percent = MetricTrend::between(
        first.body_fat_percent,
        month_reference.body_fat_percent,
        latest.body_fat_percent,
        deadband,
    );
    summary.skeletal_muscle_mass = MetricTrend::between(
        first.skeletal_muscle_mass_kg,
        month_reference.skeletal_muscle_mass_kg,
        latest.skeletal_muscle_mass_kg,
        deadband,
    );

    Ok(summary)
}

/// Earlier measurement closest to one month before the latest
///
/// `ordered` must be sorted ascending by date. Returns `None` with fewer than
/// two measurements.
fn find_month_reference<'a>(
    ordered: &[&'a BodyMeasurement],
    month_window_days: i64,
) -> Option<&'a BodyMeasurement> {
    let (latest, earlier) = ordered.split_last()?;
    let target = Duration::try_days(month_window_days)
        .and_then(|window| latest.measured_on.checked_sub_signed(window))
        .unwrap_or(NaiveDate::MIN);

    let mut best: Option<(&'a BodyMeasurement, i64)> = None;
    for &candidate in earlier.iter().rev() {
        let distance = (candidate.measured_on - target).num_days().abs();
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
        // sorted input: everything further back is only further from the target
        if candidate.measured_on <= target {
            break;
        }
    }

    best.map(|(measurement, _)| measurement)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
