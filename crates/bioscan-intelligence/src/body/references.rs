// ABOUTME: Demographic reference ranges for bioimpedance metrics
// ABOUTME: Static table keyed by sex and age band with a flagged fallback bracket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use bioscan_core::constants::age_bands::{MIDDLE_AGE_START, SENIOR_AGE_START};
use bioscan_core::errors::{require_finite, AppError, AppResult};
use bioscan_core::models::Sex;
use serde::Serialize;
use tracing::warn;

/// Reference band for one metric in one demographic bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRange {
    /// Lowest plausible value
    pub min: f64,
    /// Highest plausible value
    pub max: f64,
    /// Lower edge of the healthy band
    pub ideal_min: f64,
    /// Upper edge of the healthy band
    pub ideal_max: f64,
    /// Display unit
    pub unit: &'static str,
}

impl MetricRange {
    /// Build a range
    #[must_use]
    pub const fn new(min: f64, max: f64, ideal_min: f64, ideal_max: f64, unit: &'static str) -> Self {
        Self {
            min,
            max,
            ideal_min,
            ideal_max,
            unit,
        }
    }

    /// Check bounds are finite and ordered `min <= ideal_min <= ideal_max <= max`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite or out-of-order bounds
    pub fn validate(&self) -> AppResult<()> {
        require_finite("range.min", self.min)?;
        require_finite("range.max", self.max)?;
        require_finite("range.ideal_min", self.ideal_min)?;
        require_finite("range.ideal_max", self.ideal_max)?;

        if self.min <= self.ideal_min && self.ideal_min <= self.ideal_max && self.ideal_max <= self.max
        {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "Range bounds out of order: min {} / ideal {}..{} / max {}",
                self.min, self.ideal_min, self.ideal_max, self.max
            )))
        }
    }
}

/// Age bracket used by the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Younger than 40
    Under40,
    /// 40 to 59 inclusive
    From40To59,
    /// 60 and older
    SixtyPlus,
}

impl AgeBand {
    /// Classify an age in years
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        if age < MIDDLE_AGE_START {
            Self::Under40
        } else if age < SENIOR_AGE_START {
            Self::From40To59
        } else {
            Self::SixtyPlus
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Under40 => "<40",
            Self::From40To59 => "40-59",
            Self::SixtyPlus => "60+",
        }
    }
}

/// Key of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DemographicBracket {
    /// Biological sex
    pub sex: Sex,
    /// Age band
    pub age_band: AgeBand,
}

impl fmt::Display for DemographicBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sex, self.age_band.label())
    }
}

/// Ranges for every evaluated metric in one bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRanges {
    /// Body weight
    pub weight: MetricRange,
    /// Skeletal muscle mass
    pub skeletal_muscle_mass: MetricRange,
    /// Body fat mass
    pub body_fat_mass: MetricRange,
    /// Body fat percentage
    pub body_fat_percent: MetricRange,
    /// Body mass index
    pub bmi: MetricRange,
    /// Visceral fat level
    pub visceral_fat: MetricRange,
    /// Basal metabolic rate
    pub basal_metabolic_rate: MetricRange,
    /// Total body water
    pub total_body_water: MetricRange,
}

/// Result of reference resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceSet {
    /// Bracket the caller asked for
    pub requested: DemographicBracket,
    /// Bracket whose ranges were returned
    pub resolved: DemographicBracket,
    /// True when `resolved` differs from `requested`
    pub approximate: bool,
    /// The ranges themselves
    pub ranges: ReferenceRanges,
}

/// Bracket used whenever the requested one has no entry
pub const FALLBACK_BRACKET: DemographicBracket = DemographicBracket {
    sex: Sex::Male,
    age_band: AgeBand::From40To59,
};

const MALE_40_TO_59: ReferenceRanges = ReferenceRanges {
    weight: MetricRange::new(50.0, 110.0, 62.0, 84.0, "kg"),
    skeletal_muscle_mass: MetricRange::new(25.0, 45.0, 32.0, 40.0, "kg"),
    body_fat_mass: MetricRange::new(5.0, 35.0, 8.0, 16.0, "kg"),
    body_fat_percent: MetricRange::new(5.0, 40.0, 11.0, 22.0, "%"),
    bmi: MetricRange::new(15.0, 40.0, 18.5, 25.0, "kg/m²"),
    visceral_fat: MetricRange::new(1.0, 20.0, 1.0, 9.0, "nível"),
    basal_metabolic_rate: MetricRange::new(1200.0, 2400.0, 1600.0, 1900.0, "kcal"),
    total_body_water: MetricRange::new(30.0, 60.0, 40.0, 50.0, "L"),
};

/// Reference table. Only the male 40-59 bracket has published ranges so far.
const REFERENCE_TABLE: &[(DemographicBracket, ReferenceRanges)] =
    &[(FALLBACK_BRACKET, MALE_40_TO_59)];

/// Resolve the reference ranges for an age and sex
///
/// Brackets without an entry resolve to [`FALLBACK_BRACKET`] with
/// `approximate = true` and a warning in the logs.
///
/// # Errors
///
/// Returns `InvalidInput` when `age` is zero
pub fn get_references(age: u32, sex: Sex) -> AppResult<ReferenceSet> {
    if age == 0 {
        return Err(AppError::invalid_input("Age must be a positive integer")
            .with_details(serde_json::json!({ "field": "age" })));
    }

    let requested = DemographicBracket {
        sex,
        age_band: AgeBand::from_age(age),
    };

    if let Some((_, ranges)) = REFERENCE_TABLE
        .iter()
        .find(|(bracket, _)| *bracket == requested)
    {
        return Ok(ReferenceSet {
            requested,
            resolved: requested,
            approximate: false,
            ranges: *ranges,
        });
    }

    warn!(
        requested = %requested,
        resolved = %FALLBACK_BRACKET,
        "No reference ranges for bracket, using fallback bracket"
    );

    Ok(ReferenceSet {
        requested,
        resolved: FALLBACK_BRACKET,
        approximate: true,
        ranges: MALE_40_TO_59,
    })
}
