// ABOUTME: JSON input helpers for measurement documents
// ABOUTME: Accepts a single measurement object or an array of measurements from text or files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use bioscan_core::errors::{AppError, AppResult, ErrorCode};
use bioscan_core::models::BodyMeasurement;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum MeasurementDocument {
    Many(Vec<BodyMeasurement>),
    One(Box<BodyMeasurement>),
}

/// Parse a JSON document holding one measurement or an array of measurements
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not a measurement object or array
pub fn parse_measurements(json: &str) -> AppResult<Vec<BodyMeasurement>> {
    let document: MeasurementDocument = serde_json::from_str(json).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("Expected a measurement object or an array of measurements: {e}"),
        )
        .with_source(e)
    })?;

    Ok(match document {
        MeasurementDocument::Many(measurements) => measurements,
        MeasurementDocument::One(measurement) => vec![*measurement],
    })
}

/// Read measurements from a JSON file
///
/// # Errors
///
/// Returns `StorageError` when the file cannot be read and `InvalidFormat`
/// when its content is not a measurement document
pub fn read_measurements(path: &Path) -> AppResult<Vec<BodyMeasurement>> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display()))
            .with_details(json!({ "path": path.display().to_string() }))
            .with_source(e)
    })?;

    let measurements = parse_measurements(&text)?;
    debug!(
        path = %path.display(),
        count = measurements.len(),
        "Loaded measurements"
    );
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCAN: &str = r#"{
        "measured_on": "2025-03-14",
        "weight_kg": 82.1,
        "skeletal_muscle_mass_kg": 38.5,
        "body_fat_mass_kg": 14.2,
        "body_fat_percent": 17.3,
        "bmi": 25.3,
        "visceral_fat_level": 7,
        "basal_metabolic_rate_kcal": 1790,
        "age": 44,
        "sex": "male"
    }"#;

    #[test]
    fn test_single_object_and_array_are_accepted() {
        assert_eq!(parse_measurements(SCAN).unwrap().len(), 1);
        assert_eq!(parse_measurements(&format!("[{SCAN},{SCAN}]")).unwrap().len(), 2);
        assert!(parse_measurements("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document_is_invalid_format() {
        let err = parse_measurements(r#"{"weight_kg": 80}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
