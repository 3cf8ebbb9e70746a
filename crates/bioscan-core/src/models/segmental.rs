// ABOUTME: Per-limb and trunk breakdown reported by segmental bioimpedance scanners
// ABOUTME: SegmentReading and SegmentalAnalysis definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{require_finite, AppResult};
use serde::{Deserialize, Serialize};

/// Lean and fat mass measured for one body segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentReading {
    /// Lean (fat-free) mass in kg
    pub lean_mass_kg: f64,
    /// Fat mass in kg
    pub fat_mass_kg: f64,
}

/// Segmental analysis of a single scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentalAnalysis {
    /// Right arm
    pub right_arm: SegmentReading,
    /// Left arm
    pub left_arm: SegmentReading,
    /// Trunk
    pub trunk: SegmentReading,
    /// Right leg
    pub right_leg: SegmentReading,
    /// Left leg
    pub left_leg: SegmentReading,
}

impl SegmentalAnalysis {
    /// Segments paired with their field names
    #[must_use]
    pub fn segments(&self) -> [(&'static str, &SegmentReading); 5] {
        [
            ("right_arm", &self.right_arm),
            ("left_arm", &self.left_arm),
            ("trunk", &self.trunk),
            ("right_leg", &self.right_leg),
            ("left_leg", &self.left_leg),
        ]
    }

    /// Check every reading is finite
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first non-finite segment field
    pub fn validate(&self) -> AppResult<()> {
        for (name, reading) in self.segments() {
            require_finite(&format!("segmental.{name}.lean_mass_kg"), reading.lean_mass_kg)?;
            require_finite(&format!("segmental.{name}.fat_mass_kg"), reading.fat_mass_kg)?;
        }
        Ok(())
    }
}
