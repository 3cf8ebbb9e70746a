// ABOUTME: History trend and segmental balance configuration
// ABOUTME: Deadband for rising/falling classification, month window, limb asymmetry tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bioscan_core::constants::time::DAYS_PER_MONTH;
use serde::{Deserialize, Serialize};

/// Trend classification settings for measurement history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Variations within ±deadband are stable
    pub deadband: f64,
    /// How far back "one month ago" reaches (days)
    pub month_window_days: i64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            deadband: 0.5,
            month_window_days: DAYS_PER_MONTH,
        }
    }
}

/// Segmental balance settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentalConfig {
    /// Largest left/right lean-mass difference still considered balanced (%)
    pub asymmetry_tolerance_percent: f64,
}

impl Default for SegmentalConfig {
    fn default() -> Self {
        Self {
            asymmetry_tolerance_percent: 10.0,
        }
    }
}
