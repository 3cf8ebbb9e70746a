// ABOUTME: Benchmark fixtures for generating realistic measurement histories
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating measurement histories.

use bioscan::models::{BodyMeasurement, SegmentReading, SegmentalAnalysis, Sex};
use chrono::{Duration, NaiveDate};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A few months of weekly scans
    Small,
    /// Several years of weekly scans
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 12,
            Self::Large => 500,
        }
    }
}

const fn segment(lean_mass_kg: f64, fat_mass_kg: f64) -> SegmentReading {
    SegmentReading {
        lean_mass_kg,
        fat_mass_kg,
    }
}

/// Generate one scan; values drift slowly with `index`
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_measurement(index: usize) -> BodyMeasurement {
    let start = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap_or_default();
    let drift = (index % 40) as f64 * 0.1;
    let measured_on = start + Duration::days(index as i64 * 7);

    BodyMeasurement::new(measured_on, Sex::Male, 44, 86.0 - drift)
        .skeletal_muscle_mass_kg(36.0 + drift * 0.3)
        .body_fat_mass_kg(17.0 - drift * 0.5)
        .body_fat_percent(20.0 - drift * 0.4)
        .bmi(26.5 - drift * 0.1)
        .visceral_fat_level(10.0 - (drift / 2.0).floor())
        .basal_metabolic_rate_kcal(1750.0 + drift * 5.0)
        .total_body_water_l(47.0 + drift * 0.2)
        .segmental(SegmentalAnalysis {
            right_arm: segment(3.9, 1.1),
            left_arm: segment(3.7, 1.2),
            trunk: segment(27.5, 8.9),
            right_leg: segment(10.1, 2.6),
            left_leg: segment(9.9, 2.7),
        })
}

/// Generate a history in chronological order
#[must_use]
pub fn generate_history(size: HistorySize) -> Vec<BodyMeasurement> {
    (0..size.count()).map(generate_measurement).collect()
}
