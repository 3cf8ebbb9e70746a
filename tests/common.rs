// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and measurement builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `bioscan`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use bioscan::models::{BodyMeasurement, SegmentReading, SegmentalAnalysis, Sex};
use chrono::NaiveDate;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Parse a `YYYY-MM-DD` date
pub fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

/// Scan of a 44 year old man: 82.1 kg, 38.5 kg muscle, 17.3 % fat, visceral 7
pub fn reference_scan(measured_on: &str) -> BodyMeasurement {
    BodyMeasurement::new(date(measured_on), Sex::Male, 44, 82.1)
        .skeletal_muscle_mass_kg(38.5)
        .body_fat_mass_kg(14.2)
        .body_fat_percent(17.3)
        .bmi(25.3)
        .visceral_fat_level(7.0)
        .basal_metabolic_rate_kcal(1790.0)
}

/// Scan with only the trended fields set
pub fn trend_scan(
    measured_on: &str,
    weight_kg: f64,
    fat_percent: f64,
    muscle_kg: f64,
) -> BodyMeasurement {
    reference_scan(measured_on)
        .body_fat_percent(fat_percent)
        .skeletal_muscle_mass_kg(muscle_kg)
        .weight_kg(weight_kg)
}

/// Segmental breakdown with the given limb lean masses
pub fn segmental(arms: (f64, f64), legs: (f64, f64)) -> SegmentalAnalysis {
    let reading = |lean_mass_kg| SegmentReading {
        lean_mass_kg,
        fat_mass_kg: 1.5,
    };
    SegmentalAnalysis {
        right_arm: reading(arms.0),
        left_arm: reading(arms.1),
        trunk: reading(27.0),
        right_leg: reading(legs.0),
        left_leg: reading(legs.1),
    }
}
