// ABOUTME: Bioimpedance measurement snapshot and biological sex models
// ABOUTME: BodyMeasurement with chained setters, validation, and Sex parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SegmentalAnalysis;
use crate::constants::score::MAX_POINTS;
use crate::errors::{require_finite, AppError, AppResult};

/// Biological sex used to select reference ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male reference population
    Male,
    /// Female reference population
    Female,
}

impl Sex {
    /// Lowercase identifier as used in stored records
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized sex '{other}', expected 'male' or 'female'"
            ))),
        }
    }
}

/// One bioimpedance scan as stored by the application
///
/// The evaluator never mutates or retains a measurement; it only reads the
/// numeric fields.
///
/// # Examples
///
/// ```rust
/// use bioscan_core::models::{BodyMeasurement, Sex};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let measurement = BodyMeasurement::new(date, Sex::Male, 44, 82.1)
///     .skeletal_muscle_mass_kg(38.5)
///     .body_fat_percent(17.3)
///     .visceral_fat_level(7.0);
///
/// assert!(measurement.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurement {
    /// Record identifier in the hosted store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Date of the scan
    pub measured_on: NaiveDate,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Skeletal muscle mass (kg)
    pub skeletal_muscle_mass_kg: f64,
    /// Body fat mass (kg)
    pub body_fat_mass_kg: f64,
    /// Body fat percentage (%)
    pub body_fat_percent: f64,
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Visceral fat level (unitless index)
    pub visceral_fat_level: f64,
    /// Basal metabolic rate (kcal/day)
    pub basal_metabolic_rate_kcal: f64,
    /// Total body water (L), when the scanner reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_body_water_l: Option<f64>,
    /// Age in years at the time of the scan
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Score printed by the scanner, when the device reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    /// Per-limb and trunk breakdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segmental: Option<SegmentalAnalysis>,
}

impl BodyMeasurement {
    /// Start a measurement with the fields every scan carries
    #[must_use]
    pub fn new(measured_on: NaiveDate, sex: Sex, age: u32, weight_kg: f64) -> Self {
        Self {
            id: None,
            measured_on,
            weight_kg,
            skeletal_muscle_mass_kg: 0.0,
            body_fat_mass_kg: 0.0,
            body_fat_percent: 0.0,
            bmi: 0.0,
            visceral_fat_level: 0.0,
            basal_metabolic_rate_kcal: 0.0,
            total_body_water_l: None,
            age,
            sex,
            score: None,
            segmental: None,
        }
    }

    /// Set record identifier
    #[must_use]
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Set body weight (kg)
    #[must_use]
    pub fn weight_kg(mut self, value: f64) -> Self {
        self.weight_kg = value;
        self
    }

    /// Set skeletal muscle mass (kg)
    #[must_use]
    pub fn skeletal_muscle_mass_kg(mut self, value: f64) -> Self {
        self.skeletal_muscle_mass_kg = value;
        self
    }

    /// Set body fat mass (kg)
    #[must_use]
    pub fn body_fat_mass_kg(mut self, value: f64) -> Self {
        self.body_fat_mass_kg = value;
        self
    }

    /// Set body fat percentage
    #[must_use]
    pub fn body_fat_percent(mut self, value: f64) -> Self {
        self.body_fat_percent = value;
        self
    }

    /// Set body mass index
    #[must_use]
    pub fn bmi(mut self, value: f64) -> Self {
        self.bmi = value;
        self
    }

    /// Set visceral fat level
    #[must_use]
    pub fn visceral_fat_level(mut self, value: f64) -> Self {
        self.visceral_fat_level = value;
        self
    }

    /// Set basal metabolic rate (kcal/day)
    #[must_use]
    pub fn basal_metabolic_rate_kcal(mut self, value: f64) -> Self {
        self.basal_metabolic_rate_kcal = value;
        self
    }

    /// Set total body water (L)
    #[must_use]
    pub fn total_body_water_l(mut self, value: f64) -> Self {
        self.total_body_water_l = Some(value);
        self
    }

    /// Set the device-reported score
    #[must_use]
    pub fn score(mut self, value: u8) -> Self {
        self.score = Some(value);
        self
    }

    /// Attach a segmental breakdown
    #[must_use]
    pub fn segmental(mut self, value: SegmentalAnalysis) -> Self {
        self.segmental = Some(value);
        self
    }

    /// Required numeric fields paired with their names
    #[must_use]
    pub fn numeric_fields(&self) -> [(&'static str, f64); 7] {
        [
            ("weight_kg", self.weight_kg),
            ("skeletal_muscle_mass_kg", self.skeletal_muscle_mass_kg),
            ("body_fat_mass_kg", self.body_fat_mass_kg),
            ("body_fat_percent", self.body_fat_percent),
            ("bmi", self.bmi),
            ("visceral_fat_level", self.visceral_fat_level),
            ("basal_metabolic_rate_kcal", self.basal_metabolic_rate_kcal),
        ]
    }

    /// Check the measurement can be evaluated
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when a numeric field is not finite or `age` is zero,
    /// and `ValueOutOfRange` when the device score exceeds 100
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::invalid_input("Age must be a positive integer")
                .with_details(serde_json::json!({ "field": "age" })));
        }
        for (field, value) in self.numeric_fields() {
            require_finite(field, value)?;
        }
        if let Some(water) = self.total_body_water_l {
            require_finite("total_body_water_l", water)?;
        }
        if let Some(score) = self.score {
            if score > MAX_POINTS {
                return Err(AppError::out_of_range(
                    "score",
                    format!("Device score {score} is outside 0..={MAX_POINTS}"),
                ));
            }
        }
        if let Some(segmental) = &self.segmental {
            segmental.validate()?;
        }
        Ok(())
    }
}
