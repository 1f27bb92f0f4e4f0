// ABOUTME: Training Impulse (TRIMP) scoring policies over time-in-zone distributions
// ABOUTME: Edwards fixed weights, zone-model weights, and a duration x intensity estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::zones::{HeartRateZone, ZoneModel};
use crate::constants::formula_versions;
use crate::constants::heart_rate_zones::{EDWARDS_WEIGHTS, ZONE_COUNT};
use crate::constants::time::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::{AppError, AppResult};

/// Scale applied to the no-HR estimate: one hour at threshold scores 100
const ESTIMATE_SCALE: f64 = 100.0;

/// TRIMP scoring policy selection
///
/// - `Edwards`: fixed integer weights 1-5 on minutes in zone
/// - `Zonal`: weights supplied by the zone model
/// - `Estimated`: duration and intensity factor, for activities without HR data
///
/// # Scientific References
///
/// - Edwards, S. (1993). "The Heart Rate Monitor Book." Polar Electro Oy.
/// - Coggan, A. (2003). "Training and Racing Using a Power Meter." Peaksware LLC.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrimpAlgorithm {
    /// Edwards zone-based TRIMP
    ///
    /// Formula: `Σ(zone_minutes × zone_number)` for zones 1-5
    #[default]
    Edwards,

    /// Zone-model weighted TRIMP
    ///
    /// Formula: `Σ(zone_minutes × weight(zone))` for zones 1-5
    ///
    /// Allows non-uniform or athlete-specific zone importance.
    Zonal,

    /// No-HR estimate
    ///
    /// Formula: `hours × 100 × IF²`
    Estimated,
}

impl TrimpAlgorithm {
    /// Score a time-in-zone distribution with this policy
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `zone_seconds` is not exactly five entries or
    /// the policy is `Estimated`, which does not score zone time, and
    /// `AppError::InvalidParameter` if any entry is negative or not finite
    pub fn score_zones<M: ZoneModel + ?Sized>(
        &self,
        zone_seconds: &[f64],
        model: &M,
    ) -> AppResult<f64> {
        match self {
            Self::Edwards => edwards_trimp(zone_seconds),
            Self::Zonal => zonal_trimp(zone_seconds, model),
            Self::Estimated => Err(AppError::invalid_input(
                "Estimated TRIMP scores duration and intensity factor, not zone time",
            )),
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Edwards => "edwards",
            Self::Zonal => "zonal",
            Self::Estimated => "estimated",
        }
    }

    /// Formula version tag stamped on records scored by this policy
    #[must_use]
    pub const fn formula_version(&self) -> &'static str {
        match self {
            Self::Edwards => formula_versions::TRIMP_EDWARDS,
            Self::Zonal => formula_versions::TRIMP_ZONAL,
            Self::Estimated => formula_versions::TRIMP_ESTIMATE,
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Edwards => "Σ(zone_minutes × zone_number) for zones 1-5",
            Self::Zonal => "Σ(zone_minutes × weight(zone)) for zones 1-5",
            Self::Estimated => "(duration_seconds / 3600) × 100 × IF²",
        }
    }
}

impl FromStr for TrimpAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edwards" | "edwards_simplified" => Ok(Self::Edwards),
            "zonal" | "weighted" | "dynamic" => Ok(Self::Zonal),
            "estimated" | "estimate" | "no_hr" => Ok(Self::Estimated),
            other => Err(AppError::invalid_input(format!(
                "Unknown TRIMP algorithm: '{other}'. Valid options: edwards, zonal, estimated"
            ))),
        }
    }
}

/// Round to one decimal place
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn validate_zone_seconds(zone_seconds: &[f64]) -> AppResult<()> {
    if zone_seconds.len() != ZONE_COUNT {
        return Err(AppError::invalid_input(format!(
            "Time in zones must contain {ZONE_COUNT} entries, got {}",
            zone_seconds.len()
        ))
        .with_details(serde_json::json!({ "length": zone_seconds.len() })));
    }
    if let Some((i, seconds)) = zone_seconds
        .iter()
        .enumerate()
        .find(|(_, s)| !(s.is_finite() && **s >= 0.0))
    {
        return Err(AppError::invalid_parameter(format!(
            "Zone {} time must be a non-negative number of seconds, got {seconds}",
            i + 1
        )));
    }
    Ok(())
}

fn weighted_minutes(zone_seconds: &[f64], weight: impl Fn(usize) -> f64) -> f64 {
    zone_seconds
        .iter()
        .enumerate()
        .map(|(i, seconds)| seconds / SECONDS_PER_MINUTE * weight(i))
        .sum()
}

/// Edwards TRIMP from seconds in zones 1-5, rounded to one decimal
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `zone_seconds` is not exactly five entries
pub fn edwards_trimp(zone_seconds: &[f64]) -> AppResult<f64> {
    validate_zone_seconds(zone_seconds)?;
    Ok(round_to_tenth(weighted_minutes(zone_seconds, |i| {
        EDWARDS_WEIGHTS[i]
    })))
}

/// Zone-model weighted TRIMP from seconds in zones 1-5, rounded to one decimal
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if `zone_seconds` is not exactly five entries
pub fn zonal_trimp<M: ZoneModel + ?Sized>(zone_seconds: &[f64], model: &M) -> AppResult<f64> {
    validate_zone_seconds(zone_seconds)?;
    Ok(round_to_tenth(weighted_minutes(zone_seconds, |i| {
        model.weight(HeartRateZone::ALL[i])
    })))
}

/// Estimate TRIMP without heart rate data, rounded to one decimal
///
/// Returns 0 when either input is non-positive; never negative.
#[must_use]
pub fn estimate_trimp(duration_seconds: f64, intensity_factor: f64) -> f64 {
    if !(duration_seconds > 0.0 && intensity_factor > 0.0) {
        return 0.0;
    }
    let hours = duration_seconds / SECONDS_PER_HOUR;
    round_to_tenth(hours * ESTIMATE_SCALE * intensity_factor * intensity_factor)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_tenth() {
        assert!((round_to_tenth(12.345) - 12.3).abs() < 1e-12);
        assert!((round_to_tenth(12.36) - 12.4).abs() < 1e-9);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("EDWARDS".parse::<TrimpAlgorithm>().unwrap(), TrimpAlgorithm::Edwards);
        assert_eq!("weighted".parse::<TrimpAlgorithm>().unwrap(), TrimpAlgorithm::Zonal);
        assert_eq!("no_hr".parse::<TrimpAlgorithm>().unwrap(), TrimpAlgorithm::Estimated);
        assert!("bannister".parse::<TrimpAlgorithm>().is_err());
    }
}
