// ABOUTME: Left/right and upper/lower balance of a segmental bioimpedance breakdown
// ABOUTME: Limb lean-mass asymmetry percentages checked against a tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bioscan_core::errors::AppResult;
use bioscan_core::models::{SegmentReading, SegmentalAnalysis};
use serde::Serialize;

use crate::config::SegmentalConfig;

/// Balance indicators derived from a segmental analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentalBalance {
    /// Right/left arm lean-mass difference relative to the heavier arm (%)
    pub arm_asymmetry_percent: f64,
    /// Right/left leg lean-mass difference relative to the heavier leg (%)
    pub leg_asymmetry_percent: f64,
    /// Arm lean mass over leg lean mass; `None` when the legs report no lean mass
    pub upper_lower_ratio: Option<f64>,
    /// Both asymmetries within the configured tolerance
    pub balanced: bool,
}

/// Compute limb balance from a segmental analysis
///
/// Asymmetry is `|right - left| / max(right, left) * 100`; a pair with no lean
/// mass on either side counts as symmetric.
///
/// # Errors
///
/// Returns `InvalidInput` when a segment reading is not finite
pub fn segmental_balance(
    analysis: &SegmentalAnalysis,
    config: &SegmentalConfig,
) -> AppResult<SegmentalBalance> {
    analysis.validate()?;

    let arm_asymmetry_percent = asymmetry_percent(&analysis.right_arm, &analysis.left_arm);
    let leg_asymmetry_percent = asymmetry_percent(&analysis.right_leg, &analysis.left_leg);

    let upper = analysis.right_arm.lean_mass_kg + analysis.left_arm.lean_mass_kg;
    let lower = analysis.right_leg.lean_mass_kg + analysis.left_leg.lean_mass_kg;
    let upper_lower_ratio = (lower > 0.0).then(|| upper / lower);

    let tolerance = config.asymmetry_tolerance_percent;
    Ok(SegmentalBalance {
        arm_asymmetry_percent,
        leg_asymmetry_percent,
        upper_lower_ratio,
        balanced: arm_asymmetry_percent <= tolerance && leg_asymmetry_percent <= tolerance,
    })
}

fn asymmetry_percent(right: &SegmentReading, left: &SegmentReading) -> f64 {
    let heavier = right.lean_mass_kg.max(left.lean_mass_kg);
    if heavier <= 0.0 {
        return 0.0;
    }
    (right.lean_mass_kg - left.lean_mass_kg).abs() / heavier * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn reading(lean_mass_kg: f64) -> SegmentReading {
        SegmentReading {
            lean_mass_kg,
            fat_mass_kg: 1.0,
        }
    }

    #[test]
    fn test_asymmetry_relative_to_heavier_side() {
        assert!((asymmetry_percent(&reading(4.0), &reading(3.6)) - 10.0).abs() < 1e-9);
        assert!((asymmetry_percent(&reading(3.6), &reading(4.0)) - 10.0).abs() < 1e-9);
        assert!(asymmetry_percent(&reading(0.0), &reading(0.0)).abs() < f64::EPSILON);
    }
}
