// ABOUTME: Integration tests for single-metric evaluation against reference ranges
// ABOUTME: Covers status per side and direction, percentile bounds, monotonicity and invalid input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Metric evaluation tests
//!
//! Uses the male 40-59 muscle (25..45, ideal 32..40 kg) and body fat
//! (5..40, ideal 11..22 %) ranges.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bioscan::errors::ErrorCode;
use bioscan::intelligence::{evaluate_metric, MetricDirection, MetricRange, MetricStatus};

mod common;

const MUSCLE: MetricRange = MetricRange::new(25.0, 45.0, 32.0, 40.0, "kg");
const FAT_PERCENT: MetricRange = MetricRange::new(5.0, 40.0, 11.0, 22.0, "%");

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// INSIDE THE IDEAL BAND
// ============================================================================

#[test]
fn test_value_in_ideal_band_is_normal() {
    common::init_test_logging();
    let evaluation = evaluate_metric(36.0, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();

    assert_eq!(evaluation.status, MetricStatus::Normal);
    assert_close(evaluation.percentile_within_band, 0.0);
    assert_eq!(evaluation.description, "Dentro do ideal");
    assert_close(evaluation.value, 36.0);
}

#[test]
fn test_ideal_band_edges() {
    let low_edge = evaluate_metric(32.0, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();
    let high_edge = evaluate_metric(40.0, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();

    assert_eq!(low_edge.status, MetricStatus::Normal);
    assert_eq!(high_edge.status, MetricStatus::Normal);
    assert_close(low_edge.percentile_within_band, -50.0);
    assert_close(high_edge.percentile_within_band, 50.0);
}

#[test]
fn test_percentile_non_decreasing_within_band() {
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=16 {
        let value = 32.0 + f64::from(step) * 0.5;
        let evaluation = evaluate_metric(value, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();
        assert_eq!(evaluation.status, MetricStatus::Normal);
        assert!(
            evaluation.percentile_within_band >= previous,
            "percentile decreased at {value}"
        );
        previous = evaluation.percentile_within_band;
    }
}

// ============================================================================
// BELOW THE IDEAL BAND
// ============================================================================

#[test]
fn test_below_ideal_higher_is_better_is_low() {
    let evaluation = evaluate_metric(28.5, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();

    assert_eq!(evaluation.status, MetricStatus::Low);
    assert_close(evaluation.percentile_within_band, -50.0);
    assert_eq!(evaluation.description, "Abaixo do ideal");
}

#[test]
fn test_below_ideal_lower_is_better_stays_normal() {
    let evaluation = evaluate_metric(8.0, &FAT_PERCENT, MetricDirection::LowerIsBetter).unwrap();

    assert_eq!(evaluation.status, MetricStatus::Normal);
    assert_close(evaluation.percentile_within_band, -75.0);
}

#[test]
fn test_far_below_range_clamps_to_minus_hundred() {
    let evaluation = evaluate_metric(0.0, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();
    assert_eq!(evaluation.status, MetricStatus::Low);
    assert_close(evaluation.percentile_within_band, -100.0);

    let evaluation = evaluate_metric(0.0, &FAT_PERCENT, MetricDirection::LowerIsBetter).unwrap();
    assert_eq!(evaluation.status, MetricStatus::Normal);
    assert_close(evaluation.percentile_within_band, -100.0);
}

// ============================================================================
// ABOVE THE IDEAL BAND
// ============================================================================

#[test]
fn test_above_ideal_lower_is_better_high_then_very_high() {
    // exactly half way from ideal_max (22) to max (40)
    let half_way = evaluate_metric(31.0, &FAT_PERCENT, MetricDirection::LowerIsBetter).unwrap();
    assert_eq!(half_way.status, MetricStatus::High);
    assert_close(half_way.percentile_within_band, 75.0);

    let beyond = evaluate_metric(35.0, &FAT_PERCENT, MetricDirection::LowerIsBetter).unwrap();
    assert_eq!(beyond.status, MetricStatus::VeryHigh);
    assert_eq!(beyond.description, "Muito acima do ideal");
    assert!(beyond.percentile_within_band > 75.0);
    assert!(beyond.percentile_within_band <= 100.0);
}

#[test]
fn test_above_ideal_higher_is_better_is_high() {
    let evaluation = evaluate_metric(42.5, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();
    assert_eq!(evaluation.status, MetricStatus::High);
    assert_close(evaluation.percentile_within_band, 50.0);

    let beyond_max = evaluate_metric(60.0, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();
    assert_eq!(beyond_max.status, MetricStatus::High);
    assert_close(beyond_max.percentile_within_band, 100.0);
}

#[test]
fn test_extreme_values_stay_within_bounds() {
    for value in [-1.0e9, -5.0, 0.0, 5.0, 22.0, 40.0, 1.0e9] {
        for direction in [
            MetricDirection::HigherIsBetter,
            MetricDirection::LowerIsBetter,
            MetricDirection::TargetBand,
        ] {
            let evaluation = evaluate_metric(value, &FAT_PERCENT, direction).unwrap();
            assert!(
                (-100.0..=100.0).contains(&evaluation.percentile_within_band),
                "{value} {direction:?}"
            );
        }
    }
}

// ============================================================================
// INVALID INPUT AND DETERMINISM
// ============================================================================

#[test]
fn test_non_finite_value_rejected() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = evaluate_metric(value, &MUSCLE, MetricDirection::HigherIsBetter).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_out_of_order_range_rejected() {
    let inverted = MetricRange::new(45.0, 25.0, 32.0, 40.0, "kg");
    let err = evaluate_metric(36.0, &inverted, MetricDirection::HigherIsBetter).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_degenerate_ideal_band() {
    let point = MetricRange::new(0.0, 10.0, 5.0, 5.0, "u");
    let evaluation = evaluate_metric(5.0, &point, MetricDirection::HigherIsBetter).unwrap();
    assert_eq!(evaluation.status, MetricStatus::Normal);
    assert_close(evaluation.percentile_within_band, 0.0);
}

#[test]
fn test_evaluation_is_deterministic() {
    let first = evaluate_metric(33.3, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();
    let second = evaluate_metric(33.3, &MUSCLE, MetricDirection::HigherIsBetter).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.percentile_within_band.to_bits(),
        second.percentile_within_band.to_bits()
    );
}
