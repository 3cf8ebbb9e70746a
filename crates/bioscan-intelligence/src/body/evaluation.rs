// ABOUTME: Classification of a single observed value against its reference range
// ABOUTME: MetricDirection, MetricStatus and the asymmetric percentile-within-band rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bioscan_core::constants::descriptions;
use bioscan_core::constants::percentile::{FULL_SCALE, IDEAL_BAND_EDGE, VERY_HIGH_SPAN_FRACTION};
use bioscan_core::errors::{require_finite, AppResult};
use serde::Serialize;

use super::references::MetricRange;

/// Which side of the ideal band is favorable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricDirection {
    /// Below ideal is a deficit (muscle, water, metabolic rate)
    HigherIsBetter,
    /// Below ideal is still healthy (fat mass, fat percentage, visceral fat)
    LowerIsBetter,
    /// Both sides of the ideal band are unfavorable (weight, BMI)
    TargetBand,
}

/// Classification of one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    /// Below the ideal band
    Low,
    /// Inside the ideal band, or below it for lower-is-better metrics
    Normal,
    /// Above the ideal band
    High,
    /// More than half way from the ideal band to the range maximum
    VeryHigh,
}

impl MetricStatus {
    /// Fixed description shown next to the status
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Low => descriptions::LOW,
            Self::Normal => descriptions::NORMAL,
            Self::High => descriptions::HIGH,
            Self::VeryHigh => descriptions::VERY_HIGH,
        }
    }
}

/// Result of comparing one observed value to its range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricEvaluation {
    /// Observed value
    pub value: f64,
    /// Classification
    pub status: MetricStatus,
    /// Position relative to the ideal band, within -100..=100
    pub percentile_within_band: f64,
    /// Fixed description for `status`
    pub description: &'static str,
}

/// Classify `value` against `range`
///
/// Inside the ideal band the percentile runs linearly from -50 at `ideal_min`
/// to 50 at `ideal_max`. Outside it the percentile is proportional to the
/// distance from the band edge relative to the span up to `min`/`max`:
///
/// | side  | direction        | status                | percentile     |
/// |-------|------------------|-----------------------|----------------|
/// | below | lower is better  | normal                | -50 ..= -100   |
/// | below | higher is better | low                   | 0 ..= -100     |
/// | above | lower is better  | high / very high      | 50 ..= 100     |
/// | above | higher is better | high                  | 0 ..= 100      |
///
/// A target-band metric reads as higher is better below the band and as lower
/// is better above it. Above the band, lower-is-better and target-band values
/// are very high once they cover more than half of the `ideal_max..max` span.
///
/// # Errors
///
/// Returns `InvalidInput` if `value` or any range bound is not finite, or the
/// range bounds are out of order
pub fn evaluate_metric(
    value: f64,
    range: &MetricRange,
    direction: MetricDirection,
) -> AppResult<MetricEvaluation> {
    require_finite("value", value)?;
    range.validate()?;

    let (status, percentile) = if value < range.ideal_min {
        let ratio = span_ratio(range.ideal_min - value, range.ideal_min - range.min);
        match direction {
            MetricDirection::LowerIsBetter => (
                MetricStatus::Normal,
                IDEAL_BAND_EDGE
                    .mul_add(-ratio, -IDEAL_BAND_EDGE)
                    .clamp(-FULL_SCALE, -IDEAL_BAND_EDGE),
            ),
            MetricDirection::HigherIsBetter | MetricDirection::TargetBand => {
                (MetricStatus::Low, (-FULL_SCALE * ratio).clamp(-FULL_SCALE, 0.0))
            }
        }
    } else if value > range.ideal_max {
        let ratio = span_ratio(value - range.ideal_max, range.max - range.ideal_max);
        match direction {
            MetricDirection::LowerIsBetter | MetricDirection::TargetBand => {
                let status = if ratio <= VERY_HIGH_SPAN_FRACTION {
                    MetricStatus::High
                } else {
                    MetricStatus::VeryHigh
                };
                (status, IDEAL_BAND_EDGE.mul_add(ratio, IDEAL_BAND_EDGE))
            }
            MetricDirection::HigherIsBetter => {
                (MetricStatus::High, (FULL_SCALE * ratio).clamp(0.0, FULL_SCALE))
            }
        }
    } else {
        (MetricStatus::Normal, ideal_band_percentile(value, range))
    };

    Ok(MetricEvaluation {
        value,
        status,
        percentile_within_band: percentile.clamp(-FULL_SCALE, FULL_SCALE),
        description: status.description(),
    })
}

/// Linear position around the ideal-band midpoint, clamped to ±50
fn ideal_band_percentile(value: f64, range: &MetricRange) -> f64 {
    let half_width = (range.ideal_max - range.ideal_min) / 2.0;
    if half_width <= 0.0 {
        return 0.0;
    }
    let midpoint = (range.ideal_min + range.ideal_max) / 2.0;
    ((value - midpoint) / half_width * IDEAL_BAND_EDGE).clamp(-IDEAL_BAND_EDGE, IDEAL_BAND_EDGE)
}

/// Fraction of `span` covered by `distance`; an empty span counts as fully covered
fn span_ratio(distance: f64, span: f64) -> f64 {
    if span > 0.0 {
        distance / span
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUSCLE: MetricRange = MetricRange::new(25.0, 45.0, 32.0, 40.0, "kg");

    #[test]
    fn test_ideal_band_edges_map_to_plus_minus_fifty() {
        assert!((ideal_band_percentile(32.0, &MUSCLE) + 50.0).abs() < 1e-9);
        assert!((ideal_band_percentile(40.0, &MUSCLE) - 50.0).abs() < 1e-9);
        assert!(ideal_band_percentile(36.0, &MUSCLE).abs() < 1e-9);
    }

    #[test]
    fn test_target_band_is_low_below_and_very_high_far_above() {
        let below = evaluate_metric(28.0, &MUSCLE, MetricDirection::TargetBand).unwrap();
        assert_eq!(below.status, MetricStatus::Low);

        let far_above = evaluate_metric(44.0, &MUSCLE, MetricDirection::TargetBand).unwrap();
        assert_eq!(far_above.status, MetricStatus::VeryHigh);
    }

    #[test]
    fn test_span_ratio_degenerate_span() {
        assert!((span_ratio(3.0, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!((span_ratio(3.0, 6.0) - 0.5).abs() < f64::EPSILON);
    }
}
