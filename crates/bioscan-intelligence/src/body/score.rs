// ABOUTME: Composite 0-100 body-composition score and its categories
// ABOUTME: Additive point rules over muscle, fat percentage and visceral fat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bioscan_core::constants::score::{
    BELOW_AVERAGE_MIN, EXCELLENT_MIN, GOOD_MIN, MAX_POINTS, MIN_POINTS, NORMAL_MIN,
};
use bioscan_core::constants::visceral_fat;
use bioscan_core::errors::{require_finite, AppResult};
use bioscan_core::models::{BodyMeasurement, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::evaluation::{evaluate_metric, MetricDirection, MetricStatus};
use super::references::get_references;
use crate::config::ScoringConfig;

/// Score band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    /// Below 60
    Weak,
    /// 60 to 69
    BelowAverage,
    /// 70 to 79
    Normal,
    /// 80 to 89
    Good,
    /// 90 and above
    Excellent,
}

impl ScoreCategory {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Fraco",
            Self::BelowAverage => "Abaixo da média",
            Self::Normal => "Normal",
            Self::Good => "Bom",
            Self::Excellent => "Excelente",
        }
    }
}

/// Map points to their category
#[must_use]
pub const fn score_category(points: u8) -> ScoreCategory {
    if points >= EXCELLENT_MIN {
        ScoreCategory::Excellent
    } else if points >= GOOD_MIN {
        ScoreCategory::Good
    } else if points >= NORMAL_MIN {
        ScoreCategory::Normal
    } else if points >= BELOW_AVERAGE_MIN {
        ScoreCategory::BelowAverage
    } else {
        ScoreCategory::Weak
    }
}

/// Composite score; `category` is always `score_category(points)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    points: u8,
    category: ScoreCategory,
}

impl Score {
    /// Build a score from points, saturating at 100
    #[must_use]
    pub const fn from_points(points: u8) -> Self {
        let points = if points > MAX_POINTS { MAX_POINTS } else { points };
        Self {
            points,
            category: score_category(points),
        }
    }

    /// Points within 0..=100
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.points
    }

    /// Category derived from the points
    #[must_use]
    pub const fn category(&self) -> ScoreCategory {
        self.category
    }
}

/// Inputs of the composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Skeletal muscle mass (kg)
    pub muscle_mass_kg: f64,
    /// Body fat percentage
    pub fat_percent: f64,
    /// Visceral fat level
    pub visceral_fat_level: f64,
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
}

impl From<&BodyMeasurement> for ScoreInputs {
    fn from(measurement: &BodyMeasurement) -> Self {
        Self {
            weight_kg: measurement.weight_kg,
            muscle_mass_kg: measurement.skeletal_muscle_mass_kg,
            fat_percent: measurement.body_fat_percent,
            visceral_fat_level: measurement.visceral_fat_level,
            age: measurement.age,
            sex: measurement.sex,
        }
    }
}

/// Calculate the composite wellness score
///
/// Starts from `base_points` and adds one adjustment for each of skeletal
/// muscle mass, body fat percentage and visceral fat level. The sum is clamped
/// to 0..=100 and rounded to the nearest integer.
///
/// # Errors
///
/// Returns `InvalidInput` for non-finite inputs or a zero age
pub fn calculate_score(inputs: &ScoreInputs, config: &ScoringConfig) -> AppResult<Score> {
    require_finite("weight_kg", inputs.weight_kg)?;
    require_finite("muscle_mass_kg", inputs.muscle_mass_kg)?;
    require_finite("fat_percent", inputs.fat_percent)?;
    require_finite("visceral_fat_level", inputs.visceral_fat_level)?;

    let references = get_references(inputs.age, inputs.sex)?;
    let ranges = &references.ranges;

    let muscle = evaluate_metric(
        inputs.muscle_mass_kg,
        &ranges.skeletal_muscle_mass,
        MetricDirection::HigherIsBetter,
    )?;
    let muscle_adjustment = match muscle.status {
        MetricStatus::Normal => config.muscle_normal_bonus,
        MetricStatus::High => config.muscle_high_bonus,
        MetricStatus::Low => config.muscle_low_penalty,
        MetricStatus::VeryHigh => 0.0,
    };

    let fat = evaluate_metric(
        inputs.fat_percent,
        &ranges.body_fat_percent,
        MetricDirection::LowerIsBetter,
    )?;
    let fat_adjustment = match fat.status {
        MetricStatus::Normal if inputs.fat_percent < ranges.body_fat_percent.ideal_min => {
            config.fat_below_ideal_bonus
        }
        MetricStatus::Normal => config.fat_normal_bonus,
        MetricStatus::High => config.fat_high_penalty,
        MetricStatus::VeryHigh => config.fat_very_high_penalty,
        MetricStatus::Low => 0.0,
    };

    let visceral_adjustment = if inputs.visceral_fat_level <= visceral_fat::NORMAL_MAX {
        config.visceral_normal_bonus
    } else if inputs.visceral_fat_level <= visceral_fat::HIGH_MAX {
        config.visceral_high_penalty
    } else {
        config.visceral_very_high_penalty
    };

    let raw = config.base_points + muscle_adjustment + fat_adjustment + visceral_adjustment;
    let points = raw
        .clamp(f64::from(MIN_POINTS), f64::from(MAX_POINTS))
        .round() as u8;

    debug!(
        muscle_status = ?muscle.status,
        fat_status = ?fat.status,
        muscle_adjustment,
        fat_adjustment,
        visceral_adjustment,
        points,
        approximate_references = references.approximate,
        "Calculated composite score"
    );

    Ok(Score::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_saturates() {
        let score = Score::from_points(250);
        assert_eq!(score.points(), 100);
        assert_eq!(score.category(), ScoreCategory::Excellent);
    }

    #[test]
    fn test_category_band_edges() {
        assert_eq!(score_category(59), ScoreCategory::Weak);
        assert_eq!(score_category(60), ScoreCategory::BelowAverage);
        assert_eq!(score_category(69), ScoreCategory::BelowAverage);
        assert_eq!(score_category(70), ScoreCategory::Normal);
        assert_eq!(score_category(79), ScoreCategory::Normal);
        assert_eq!(score_category(80), ScoreCategory::Good);
        assert_eq!(score_category(89), ScoreCategory::Good);
        assert_eq!(score_category(90), ScoreCategory::Excellent);
    }
}
