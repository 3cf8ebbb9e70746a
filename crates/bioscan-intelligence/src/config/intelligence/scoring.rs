// ABOUTME: Composite score adjustment configuration
// ABOUTME: Base points and per-status bonuses and penalties applied by calculate_score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Additive point adjustments for the composite score
///
/// Bonuses are non-negative and penalties non-positive. The defaults are the
/// published product rules; changing them changes every stored score's meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Starting points before any adjustment
    pub base_points: f64,
    /// Skeletal muscle mass inside the ideal band
    pub muscle_normal_bonus: f64,
    /// Skeletal muscle mass above the ideal band
    pub muscle_high_bonus: f64,
    /// Skeletal muscle mass below the ideal band
    pub muscle_low_penalty: f64,
    /// Body fat percentage under the ideal minimum
    pub fat_below_ideal_bonus: f64,
    /// Body fat percentage inside the ideal band
    pub fat_normal_bonus: f64,
    /// Body fat percentage moderately above the ideal band
    pub fat_high_penalty: f64,
    /// Body fat percentage far above the ideal band
    pub fat_very_high_penalty: f64,
    /// Visceral fat level 9 or lower
    pub visceral_normal_bonus: f64,
    /// Visceral fat level 10 to 14
    pub visceral_high_penalty: f64,
    /// Visceral fat level 15 or higher
    pub visceral_very_high_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_points: 70.0,
            muscle_normal_bonus: 15.0,
            muscle_high_bonus: 10.0,
            muscle_low_penalty: -5.0,
            fat_below_ideal_bonus: 10.0,
            fat_normal_bonus: 5.0,
            fat_high_penalty: -10.0,
            fat_very_high_penalty: -15.0,
            visceral_normal_bonus: 5.0,
            visceral_high_penalty: -5.0,
            visceral_very_high_penalty: -10.0,
        }
    }
}

impl ScoringConfig {
    /// Bonuses paired with their names
    #[must_use]
    pub const fn bonuses(&self) -> [(&'static str, f64); 5] {
        [
            ("muscle_normal_bonus", self.muscle_normal_bonus),
            ("muscle_high_bonus", self.muscle_high_bonus),
            ("fat_below_ideal_bonus", self.fat_below_ideal_bonus),
            ("fat_normal_bonus", self.fat_normal_bonus),
            ("visceral_normal_bonus", self.visceral_normal_bonus),
        ]
    }

    /// Penalties paired with their names
    #[must_use]
    pub const fn penalties(&self) -> [(&'static str, f64); 5] {
        [
            ("muscle_low_penalty", self.muscle_low_penalty),
            ("fat_high_penalty", self.fat_high_penalty),
            ("fat_very_high_penalty", self.fat_very_high_penalty),
            ("visceral_high_penalty", self.visceral_high_penalty),
            ("visceral_very_high_penalty", self.visceral_very_high_penalty),
        ]
    }
}
