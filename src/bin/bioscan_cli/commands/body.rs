// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Single-scan commands for bioscan-cli
// ABOUTME: Reference lookup, full evaluation, composite score and BMI

use std::path::Path;

use bioscan::input::read_measurements;
use bioscan::intelligence::{
    bmi_interpretation, calculate_bmi, calculate_score, evaluate_history, evaluate_measurement,
    get_references, BmiClass, BodyCompositionConfig, Interpretation, ScoreCategory, ScoreInputs,
};
use bioscan::models::Sex;
use serde::Serialize;
use tracing::info;

use crate::helpers::display::print_json;
use crate::Result;

#[derive(Serialize)]
struct ScoreOutput {
    points: u8,
    category: ScoreCategory,
    label: &'static str,
}

#[derive(Serialize)]
struct BmiOutput {
    bmi: f64,
    interpretation: Interpretation<BmiClass>,
}

/// Print the reference ranges for an age and sex
pub fn references(age: u32, sex: Sex) -> Result<()> {
    let references = get_references(age, sex)?;
    print_json(&references)
}

/// Print the report of every measurement in a file
///
/// A file holding a single object prints a single report; an array prints an
/// array of reports in file order.
pub fn evaluate(file: &Path) -> Result<()> {
    let config = BodyCompositionConfig::global();
    let measurements = read_measurements(file)?;

    if let [measurement] = measurements.as_slice() {
        let report = evaluate_measurement(measurement, config)?;
        return print_json(&report);
    }

    let reports = evaluate_history(&measurements, config)?;
    info!(count = reports.len(), "Evaluated measurement history");
    print_json(&reports)
}

/// Print the composite score of raw values
pub fn score(
    weight_kg: f64,
    muscle_mass_kg: f64,
    fat_percent: f64,
    visceral_fat_level: f64,
    age: u32,
    sex: Sex,
) -> Result<()> {
    let config = BodyCompositionConfig::global();
    let inputs = ScoreInputs {
        weight_kg,
        muscle_mass_kg,
        fat_percent,
        visceral_fat_level,
        age,
        sex,
    };
    let score = calculate_score(&inputs, &config.scoring)?;
    print_json(&ScoreOutput {
        points: score.points(),
        category: score.category(),
        label: score.category().label(),
    })
}

/// Print the BMI of a weight and height with its interpretation
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<()> {
    let bmi = calculate_bmi(weight_kg, height_m)?;
    let interpretation = bmi_interpretation(bmi)?;
    print_json(&BmiOutput {
        bmi: (bmi * 10.0).round() / 10.0,
        interpretation,
    })
}
