// ABOUTME: Heart rate zone models (static max-HR derived, dynamic externally configured)
// ABOUTME: Classifies HR samples into zones 1-5 and accumulates time spent in each zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Heart rate zone classification
//!
//! A sample below zone 1's minimum is not counted in any zone. It is dropped rather
//! than clamped into zone 1 because clamping would change historical TRIMP totals.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::heart_rate_zones::{
    DYNAMIC_MODEL_TYPE, EDWARDS_WEIGHTS, SECONDS_PER_SAMPLE, STATIC_MODEL_TYPE,
    STATIC_MODEL_VERSION, STATIC_ZONE_FRACTIONS, ZONE_COUNT,
};
use crate::constants::time::SECONDS_PER_MINUTE;
use crate::errors::{AppError, AppResult};
use crate::models::{ZoneBand, ZoneModelSnapshot};

/// Lowest max HR accepted for the static model
const MIN_MAX_HR: u32 = 20;
/// Highest max HR accepted for the static model
const MAX_MAX_HR: u32 = 250;

/// Heart rate zone index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeartRateZone {
    /// Recovery
    Z1,
    /// Aerobic
    Z2,
    /// Tempo
    Z3,
    /// Threshold
    Z4,
    /// VO2max
    Z5,
}

impl HeartRateZone {
    /// All zones in ascending order
    pub const ALL: [Self; ZONE_COUNT] = [Self::Z1, Self::Z2, Self::Z3, Self::Z4, Self::Z5];

    /// Zone number (1-5)
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Zero-based array index
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Zone from its number (1-5)
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Z1),
            2 => Some(Self::Z2),
            3 => Some(Self::Z3),
            4 => Some(Self::Z4),
            5 => Some(Self::Z5),
            _ => None,
        }
    }
}

/// Classification contract shared by every zone model
///
/// Implementations must keep their bands contiguous and non-overlapping.
pub trait ZoneModel: Send + Sync {
    /// Zone for a heart rate sample, `None` when below zone 1
    fn classify(&self, heart_rate: f64) -> Option<HeartRateZone>;

    /// TRIMP weight applied to minutes in `zone`
    fn weight(&self, zone: HeartRateZone) -> f64;

    /// Ordered zone bands, zone 1 first
    fn bands(&self) -> &[ZoneBand];

    /// Model type tag
    fn model_type(&self) -> &str;

    /// Model version tag
    fn model_version(&self) -> &str;

    /// Audit snapshot of the model
    fn snapshot(&self) -> ZoneModelSnapshot {
        ZoneModelSnapshot {
            model_type: self.model_type().to_owned(),
            model_version: self.model_version().to_owned(),
            zones: self.bands().to_vec(),
        }
    }
}

/// Descending comparison against zone minimums: the highest zone whose minimum is
/// at or below the sample wins
fn classify_by_minimums(bands: &[ZoneBand], heart_rate: f64) -> Option<HeartRateZone> {
    bands
        .iter()
        .rev()
        .find(|band| heart_rate >= f64::from(band.min_bpm))
        .and_then(|band| HeartRateZone::from_number(band.zone))
}

/// Five zones derived from a single max HR value
///
/// Zone `n` starts at `round(fraction_n x max_hr)` for fractions 0.5, 0.6, 0.7, 0.8, 0.9
/// and ends one bpm below the next zone's start. Zone 5 ends at max HR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticZoneModel {
    max_hr: u32,
    bands: [ZoneBand; ZONE_COUNT],
}

impl StaticZoneModel {
    /// Build the static model for `max_hr`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParameter` if `max_hr` is outside 20-250 bpm
    pub fn from_max_hr(max_hr: u32) -> AppResult<Self> {
        if !(MIN_MAX_HR..=MAX_MAX_HR).contains(&max_hr) {
            return Err(AppError::invalid_parameter(format!(
                "Maximum heart rate must be between {MIN_MAX_HR} and {MAX_MAX_HR} bpm, got {max_hr}"
            )));
        }

        let minimums =
            STATIC_ZONE_FRACTIONS.map(|fraction| (fraction * f64::from(max_hr)).round() as u32);

        let bands = std::array::from_fn(|i| ZoneBand {
            zone: i as u8 + 1,
            min_bpm: minimums[i],
            max_bpm: minimums.get(i + 1).map_or(max_hr, |next_min| next_min - 1),
            weight: EDWARDS_WEIGHTS[i],
        });

        Ok(Self { max_hr, bands })
    }

    /// Max HR the model was derived from
    #[must_use]
    pub const fn max_hr(&self) -> u32 {
        self.max_hr
    }
}

impl ZoneModel for StaticZoneModel {
    fn classify(&self, heart_rate: f64) -> Option<HeartRateZone> {
        classify_by_minimums(&self.bands, heart_rate)
    }

    fn weight(&self, zone: HeartRateZone) -> f64 {
        self.bands[zone.index()].weight
    }

    fn bands(&self) -> &[ZoneBand] {
        &self.bands
    }

    fn model_type(&self) -> &str {
        STATIC_MODEL_TYPE
    }

    fn model_version(&self) -> &str {
        STATIC_MODEL_VERSION
    }
}

/// Externally supplied zone table with per-zone TRIMP weights
///
/// The weighting curve is owned by whoever configures the table; the engine only
/// checks that the bands form a contiguous five-zone partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicZoneModel {
    version: String,
    bands: Vec<ZoneBand>,
}

impl DynamicZoneModel {
    /// Validate and wrap a zone table
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the table does not hold exactly five bands
    /// numbered 1-5, contiguous and non-overlapping, and `AppError::InvalidParameter`
    /// if a weight is negative or not finite
    pub fn new(bands: Vec<ZoneBand>, version: impl Into<String>) -> AppResult<Self> {
        if bands.len() != ZONE_COUNT {
            return Err(AppError::invalid_input(format!(
                "Zone table must contain {ZONE_COUNT} zones, got {}",
                bands.len()
            )));
        }

        for (i, band) in bands.iter().enumerate() {
            if usize::from(band.zone) != i + 1 {
                return Err(AppError::invalid_input(format!(
                    "Zone at position {i} must be zone {}, got zone {}",
                    i + 1,
                    band.zone
                )));
            }
            if band.min_bpm > band.max_bpm {
                return Err(AppError::invalid_input(format!(
                    "Zone {} has min {} above max {}",
                    band.zone, band.min_bpm, band.max_bpm
                )));
            }
            if !(band.weight.is_finite() && band.weight >= 0.0) {
                return Err(AppError::invalid_parameter(format!(
                    "Zone {} weight must be a non-negative number, got {}",
                    band.zone, band.weight
                )));
            }
        }

        if let Some(gap) = bands
            .windows(2)
            .find(|pair| pair[0].max_bpm.checked_add(1) != Some(pair[1].min_bpm))
        {
            return Err(AppError::invalid_input(format!(
                "Zones {} and {} are not contiguous ({} -> {})",
                gap[0].zone, gap[1].zone, gap[0].max_bpm, gap[1].min_bpm
            )));
        }

        Ok(Self {
            version: version.into(),
            bands,
        })
    }
}

impl ZoneModel for DynamicZoneModel {
    fn classify(&self, heart_rate: f64) -> Option<HeartRateZone> {
        classify_by_minimums(&self.bands, heart_rate)
    }

    fn weight(&self, zone: HeartRateZone) -> f64 {
        self.bands[zone.index()].weight
    }

    fn bands(&self) -> &[ZoneBand] {
        &self.bands
    }

    fn model_type(&self) -> &str {
        DYNAMIC_MODEL_TYPE
    }

    fn model_version(&self) -> &str {
        &self.version
    }
}

/// Seconds spent in each zone for one activity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeInZones {
    seconds: [f64; ZONE_COUNT],
    dropped_samples: usize,
}

impl TimeInZones {
    /// Accumulate one second per HR sample
    ///
    /// Uses rayon for a single parallel classification pass; counts are merged as
    /// integers so the result does not depend on thread scheduling.
    #[must_use]
    pub fn from_hr_stream<M: ZoneModel + ?Sized>(heart_rates: &[f64], model: &M) -> Self {
        let (counts, dropped) = heart_rates
            .par_iter()
            .fold(
                || ([0usize; ZONE_COUNT], 0usize),
                |(mut counts, mut dropped), &hr| {
                    match model.classify(hr) {
                        Some(zone) => counts[zone.index()] += 1,
                        None => dropped += 1,
                    }
                    (counts, dropped)
                },
            )
            .reduce(
                || ([0usize; ZONE_COUNT], 0usize),
                |(a, dropped_a), (b, dropped_b)| {
                    (std::array::from_fn(|i| a[i] + b[i]), dropped_a + dropped_b)
                },
            );

        if dropped > 0 {
            trace!(
                dropped_samples = dropped,
                total_samples = heart_rates.len(),
                "Heart rate samples below zone 1 not counted"
            );
        }

        Self {
            seconds: counts.map(|count| count as f64 * SECONDS_PER_SAMPLE),
            dropped_samples: dropped,
        }
    }

    /// Accumulate elapsed time from equal-length HR and elapsed-seconds streams
    ///
    /// Each sample is credited with the time elapsed since the previous sample; the
    /// first sample is credited one second and non-increasing timestamps credit zero.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the streams differ in length
    pub fn from_streams<M: ZoneModel + ?Sized>(
        heart_rates: &[f64],
        elapsed_seconds: &[f64],
        model: &M,
    ) -> AppResult<Self> {
        if heart_rates.len() != elapsed_seconds.len() {
            return Err(AppError::invalid_input(format!(
                "Heart rate and time streams must be equal length ({} vs {})",
                heart_rates.len(),
                elapsed_seconds.len()
            )));
        }

        let mut result = Self::default();
        for (i, (&hr, &t)) in heart_rates.iter().zip(elapsed_seconds).enumerate() {
            let credit = if i == 0 {
                SECONDS_PER_SAMPLE
            } else {
                (t - elapsed_seconds[i - 1]).max(0.0)
            };
            match model.classify(hr) {
                Some(zone) => result.seconds[zone.index()] += credit,
                None => result.dropped_samples += 1,
            }
        }

        Ok(result)
    }

    /// Seconds per zone, zone 1 first
    #[must_use]
    pub const fn as_slice(&self) -> &[f64] {
        &self.seconds
    }

    /// Seconds in a single zone
    #[must_use]
    pub const fn seconds_in(&self, zone: HeartRateZone) -> f64 {
        self.seconds[zone.index()]
    }

    /// Minutes per zone, zone 1 first
    #[must_use]
    pub fn minutes(&self) -> [f64; ZONE_COUNT] {
        self.seconds.map(|s| s / SECONDS_PER_MINUTE)
    }

    /// Total classified seconds
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.seconds.iter().sum()
    }

    /// Samples that fell below zone 1
    #[must_use]
    pub const fn dropped_samples(&self) -> usize {
        self.dropped_samples
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_numbers_round_trip() {
        for zone in HeartRateZone::ALL {
            assert_eq!(HeartRateZone::from_number(zone.number()), Some(zone));
        }
        assert_eq!(HeartRateZone::from_number(0), None);
        assert_eq!(HeartRateZone::from_number(6), None);
    }

    #[test]
    fn test_nan_heart_rate_is_unclassified() {
        let model = StaticZoneModel::from_max_hr(200).unwrap();
        assert_eq!(model.classify(f64::NAN), None);
    }
}
