// ABOUTME: Body-composition configuration for scoring, history trends and segmental balance
// ABOUTME: Defaults, environment overrides, validation and the process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body-Composition Configuration Module
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export BIOSCAN_SCORE_BASE=70
//!    export BIOSCAN_TREND_DEADBAND=0.5
//!    export BIOSCAN_TREND_MONTH_DAYS=30
//!    export BIOSCAN_SEGMENTAL_TOLERANCE_PCT=10
//!    ```
//!
//! 2. Default values (if env vars not set)

mod error;
mod scoring;
mod trends;

pub use error::ConfigError;
pub use scoring::ScoringConfig;
pub use trends::{SegmentalConfig, TrendConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

/// Main body-composition configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// Composite score adjustments
    pub scoring: ScoringConfig,
    /// History trend classification
    pub trends: TrendConfig,
    /// Segmental balance tolerance
    pub segmental: SegmentalConfig,
}

/// Global configuration singleton
static BODY_COMPOSITION_CONFIG: OnceLock<BodyCompositionConfig> = OnceLock::new();

impl BodyCompositionConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults when the environment does not load.
    pub fn global() -> &'static Self {
        Self::try_global().unwrap_or_else(|e| {
            tracing::warn!("Failed to load body composition config: {}, using defaults", e);
            BODY_COMPOSITION_CONFIG.get_or_init(Self::default)
        })
    }

    /// Load the global configuration instance, surfacing load failures
    ///
    /// Only a successful load is cached; a failure leaves the singleton unset.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn try_global() -> Result<&'static Self, ConfigError> {
        if let Some(config) = BODY_COMPOSITION_CONFIG.get() {
            return Ok(config);
        }
        let config = Self::load()?;
        Ok(BODY_COMPOSITION_CONFIG.get_or_init(|| config))
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a bonus is negative, a penalty is positive, the base
    /// falls outside the score scale, or a trend/segmental setting is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.scoring.base_points) {
            return Err(ConfigError::InvalidRange("base_points must be within 0..=100"));
        }

        for (name, value) in self.scoring.bonuses() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidAdjustment(name));
            }
        }

        for (name, value) in self.scoring.penalties() {
            if !value.is_finite() || value > 0.0 {
                return Err(ConfigError::InvalidAdjustment(name));
            }
        }

        if !self.trends.deadband.is_finite() || self.trends.deadband < 0.0 {
            return Err(ConfigError::InvalidRange("trend deadband must be >= 0"));
        }

        if self.trends.month_window_days <= 0 {
            return Err(ConfigError::InvalidRange("month_window_days must be > 0"));
        }

        let tolerance = self.segmental.asymmetry_tolerance_percent;
        if !(0.0..=100.0).contains(&tolerance) {
            return Err(ConfigError::InvalidRange(
                "asymmetry_tolerance_percent must be within 0..=100",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = env_override("BIOSCAN_SCORE_BASE")? {
            self.scoring.base_points = val;
        }

        if let Some(val) = env_override("BIOSCAN_TREND_DEADBAND")? {
            self.trends.deadband = val;
        }

        if let Some(val) = env_override("BIOSCAN_TREND_MONTH_DAYS")? {
            self.trends.month_window_days = val;
        }

        if let Some(val) = env_override("BIOSCAN_SEGMENTAL_TOLERANCE_PCT")? {
            self.segmental.asymmetry_tolerance_percent = val;
        }

        Ok(self)
    }
}

/// Parse an optional environment override
fn env_override<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {val}"))),
        Err(_) => Ok(None),
    }
}
