// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: History commands for bioscan-cli
// ABOUTME: Latest-pair comparison and month/total trend summary of a measurement file

use std::path::Path;

use bioscan::errors::AppError;
use bioscan::input::read_measurements;
use bioscan::intelligence::{
    calculate_body_summary, compare_measurements, BodyCompositionConfig, MeasurementComparison,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::helpers::display::print_json;
use crate::Result;

#[derive(Serialize)]
struct ComparisonOutput {
    previous_measured_on: NaiveDate,
    current_measured_on: NaiveDate,
    changes: MeasurementComparison,
}

/// Print the changes between the two most recent measurements of a file
pub fn compare(file: &Path) -> Result<()> {
    let config = BodyCompositionConfig::global();
    let mut measurements = read_measurements(file)?;
    measurements.sort_by_key(|m| m.measured_on);

    let [.., previous, current] = measurements.as_slice() else {
        return Err(AppError::invalid_input(format!(
            "Comparison needs at least two measurements, found {}",
            measurements.len()
        ))
        .with_details(json!({ "count": measurements.len() })));
    };

    let changes = compare_measurements(previous, current, &config.scoring)?;
    print_json(&ComparisonOutput {
        previous_measured_on: previous.measured_on,
        current_measured_on: current.measured_on,
        changes,
    })
}

/// Print the trend summary of a measurement file
pub fn summary(file: &Path) -> Result<()> {
    let config = BodyCompositionConfig::global();
    let measurements = read_measurements(file)?;
    let summary = calculate_body_summary(&measurements, &config.trends)?;
    print_json(&summary)
}
