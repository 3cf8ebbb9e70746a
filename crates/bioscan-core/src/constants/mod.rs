// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Score bands, interpretation thresholds and age brackets for body-composition evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Fixed thresholds used by the evaluator, grouped by domain. Values that
//! operators may tune live in the intelligence crate's configuration instead.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the command-line front end
    pub const BIOSCAN_CLI: &str = "bioscan-cli";
}

/// Age bracket boundaries (years)
pub mod age_bands {
    /// First age that belongs to the middle bracket
    pub const MIDDLE_AGE_START: u32 = 40;
    /// First age that belongs to the senior bracket
    pub const SENIOR_AGE_START: u32 = 60;
}

/// Composite score category lower bounds (points, inclusive)
pub mod score {
    /// Lowest possible score
    pub const MIN_POINTS: u8 = 0;
    /// Highest possible score
    pub const MAX_POINTS: u8 = 100;
    /// Lower bound of the "below average" category
    pub const BELOW_AVERAGE_MIN: u8 = 60;
    /// Lower bound of the "normal" category
    pub const NORMAL_MIN: u8 = 70;
    /// Lower bound of the "good" category
    pub const GOOD_MIN: u8 = 80;
    /// Lower bound of the "excellent" category
    pub const EXCELLENT_MIN: u8 = 90;
}

/// Visceral fat level bands (unitless index)
pub mod visceral_fat {
    /// Highest level still considered normal
    pub const NORMAL_MAX: f64 = 9.0;
    /// Highest level still considered high; anything above is very high
    pub const HIGH_MAX: f64 = 14.0;
}

/// WHO body mass index bands (kg/m²)
pub mod bmi {
    /// Below this is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this (and not underweight) is normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this is overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
    /// Below this is obesity class I
    pub const OBESITY_I_BELOW: f64 = 35.0;
    /// Below this is obesity class II; anything above is class III
    pub const OBESITY_II_BELOW: f64 = 40.0;
}

/// Body fat percentage cut points per age bracket
///
/// Each array is `[athletic, normal, above, high]`: values below the first cut
/// are athletic, below the second normal, below the third above ideal, below
/// the fourth high, and anything else very high.
pub mod body_fat {
    /// Cut points for ages under 40
    pub const UNDER_40: [f64; 4] = [14.0, 21.0, 25.0, 30.0];
    /// Cut points for ages 40 to 59
    pub const FROM_40_TO_59: [f64; 4] = [16.0, 23.0, 27.0, 32.0];
    /// Cut points for ages 60 and above
    pub const SIXTY_PLUS: [f64; 4] = [17.0, 25.0, 29.0, 34.0];
}

/// Percentile scale bounds used by metric evaluation
pub mod percentile {
    /// Magnitude of the ideal-band half scale
    pub const IDEAL_BAND_EDGE: f64 = 50.0;
    /// Magnitude of the full scale
    pub const FULL_SCALE: f64 = 100.0;
    /// Fraction of the upper span above which a lower-is-better metric is very high
    pub const VERY_HIGH_SPAN_FRACTION: f64 = 0.5;
}

/// Fixed product copy shown next to each metric status
pub mod descriptions {
    /// Status `low`
    pub const LOW: &str = "Abaixo do ideal";
    /// Status `normal`
    pub const NORMAL: &str = "Dentro do ideal";
    /// Status `high`
    pub const HIGH: &str = "Acima do ideal";
    /// Status `very_high`
    pub const VERY_HIGH: &str = "Muito acima do ideal";
}

/// Calendar helpers
pub mod time {
    /// Days treated as "one month ago" when summarizing history
    pub const DAYS_PER_MONTH: i64 = 30;
}
