// ABOUTME: Training load engine configuration loaded from environment variables
// ABOUTME: Time constants, projection horizon, ramp-rate windows and formula version tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Load Configuration
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export TRAINING_LOAD_CTL_DAYS=42
//!    export TRAINING_LOAD_PROJECTION_DAYS=14
//!    ```
//!
//! 2. Default values from `constants` (if env vars not set)

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;
use crate::constants::formula_versions::DAILY_LOAD;
use crate::constants::ramp_rate::{DISPLAY_POINTS, MIN_SAMPLES, WEEK_DAYS};
use crate::constants::training_load::{
    ATL_TIME_CONSTANT_DAYS, CTL_TIME_CONSTANT_DAYS, DEFAULT_PROJECTION_DAYS,
};

static TRAINING_LOAD_CONFIG: OnceLock<TrainingLoadConfig> = OnceLock::new();

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadConfig {
    /// CTL time constant in days
    pub ctl_days: f64,
    /// ATL time constant in days
    pub atl_days: f64,
    /// Default forecast horizon in days
    pub projection_days: u32,
    /// Series length required before ramp-rate output starts
    pub ramp_min_samples: usize,
    /// Maximum ramp-rate points returned
    pub ramp_display_points: usize,
    /// Formula tag stamped on daily samples
    pub formula_version: String,
}

impl Default for TrainingLoadConfig {
    fn default() -> Self {
        Self {
            ctl_days: CTL_TIME_CONSTANT_DAYS,
            atl_days: ATL_TIME_CONSTANT_DAYS,
            projection_days: DEFAULT_PROJECTION_DAYS,
            ramp_min_samples: MIN_SAMPLES,
            ramp_display_points: DISPLAY_POINTS,
            formula_version: DAILY_LOAD.to_owned(),
        }
    }
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("{key}='{raw}' is not a valid value"))),
        Err(_) => Ok(default),
    }
}

impl TrainingLoadConfig {
    /// Get the global configuration instance, loaded from the environment on first use
    #[must_use]
    pub fn global() -> &'static Self {
        TRAINING_LOAD_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load training load config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from environment, falling back to defaults per field
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a set variable cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            ctl_days: env_or("TRAINING_LOAD_CTL_DAYS", defaults.ctl_days)?,
            atl_days: env_or("TRAINING_LOAD_ATL_DAYS", defaults.atl_days)?,
            projection_days: env_or("TRAINING_LOAD_PROJECTION_DAYS", defaults.projection_days)?,
            ramp_min_samples: env_or("TRAINING_LOAD_RAMP_MIN_SAMPLES", defaults.ramp_min_samples)?,
            ramp_display_points: env_or(
                "TRAINING_LOAD_RAMP_DISPLAY_POINTS",
                defaults.ramp_display_points,
            )?,
            formula_version: env::var("TRAINING_LOAD_FORMULA_VERSION")
                .unwrap_or(defaults.formula_version),
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ctl_days.is_finite() && self.ctl_days > 0.0) {
            return Err(ConfigError::InvalidRange("ctl_days must be positive"));
        }
        if !(self.atl_days.is_finite() && self.atl_days > 0.0) {
            return Err(ConfigError::InvalidRange("atl_days must be positive"));
        }
        if self.atl_days >= self.ctl_days {
            return Err(ConfigError::InvalidRange("atl_days must be < ctl_days"));
        }
        if self.projection_days == 0 {
            return Err(ConfigError::InvalidRange("projection_days must be >= 1"));
        }
        if self.ramp_min_samples <= WEEK_DAYS {
            return Err(ConfigError::InvalidRange(
                "ramp_min_samples must cover more than one week",
            ));
        }
        if self.ramp_display_points == 0 {
            return Err(ConfigError::InvalidRange("ramp_display_points must be >= 1"));
        }
        if self.formula_version.trim().is_empty() {
            return Err(ConfigError::InvalidRange("formula_version must not be empty"));
        }
        Ok(())
    }
}
