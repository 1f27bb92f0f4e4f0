// ABOUTME: Per-activity TRIMP scoring into audit records and daily TRIMP aggregation
// ABOUTME: Selects Edwards, zone-weighted, or no-HR estimate scoring based on available data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use super::algorithms::trimp::estimate_trimp;
use super::algorithms::{TimeInZones, TrimpAlgorithm, ZoneModel};
use crate::constants::heart_rate_zones::DYNAMIC_MODEL_TYPE;
use crate::constants::time::SECONDS_PER_MINUTE;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityTrimpRecord, DailyTrimp};

/// Raw data for one synced activity
#[derive(Debug, Clone, Copy)]
pub struct ActivityTrimpInput<'a> {
    /// Provider activity identifier
    pub activity_id: &'a str,
    /// Calendar day the activity started on
    pub activity_date: NaiveDate,
    /// Heart rate samples in bpm
    pub heart_rates: Option<&'a [f64]>,
    /// Elapsed seconds per heart rate sample (equal length)
    pub elapsed_seconds: Option<&'a [f64]>,
    /// Moving duration in seconds
    pub duration_seconds: f64,
    /// Intensity factor for the no-HR estimate
    pub intensity_factor: Option<f64>,
    /// Average speed in m/s
    pub average_speed: Option<f64>,
    /// Average heart rate in bpm
    pub average_heart_rate: Option<f64>,
}

impl<'a> ActivityTrimpInput<'a> {
    /// Input with only identity and duration; add streams or metrics with the setters
    #[must_use]
    pub const fn new(activity_id: &'a str, activity_date: NaiveDate, duration_seconds: f64) -> Self {
        Self {
            activity_id,
            activity_date,
            heart_rates: None,
            elapsed_seconds: None,
            duration_seconds,
            intensity_factor: None,
            average_speed: None,
            average_heart_rate: None,
        }
    }

    /// Attach a heart rate stream sampled once per second
    #[must_use]
    pub const fn heart_rates(mut self, heart_rates: &'a [f64]) -> Self {
        self.heart_rates = Some(heart_rates);
        self
    }

    /// Attach an elapsed-time stream matching the heart rate stream
    #[must_use]
    pub const fn elapsed_seconds(mut self, elapsed_seconds: &'a [f64]) -> Self {
        self.elapsed_seconds = Some(elapsed_seconds);
        self
    }

    /// Attach the intensity factor used when no heart rate stream exists
    #[must_use]
    pub const fn intensity_factor(mut self, intensity_factor: f64) -> Self {
        self.intensity_factor = Some(intensity_factor);
        self
    }

    /// Attach average speed (m/s) and average heart rate (bpm)
    #[must_use]
    pub const fn averages(mut self, average_speed: f64, average_heart_rate: f64) -> Self {
        self.average_speed = Some(average_speed);
        self.average_heart_rate = Some(average_heart_rate);
        self
    }

    fn has_heart_rate(&self) -> bool {
        self.heart_rates.is_some_and(|hr| !hr.is_empty())
    }
}

/// Scores activities against one athlete's zone model
#[derive(Debug, Clone)]
pub struct ActivityTrimpCalculator<M> {
    zone_model: M,
    algorithm: Option<TrimpAlgorithm>,
}

impl<M: ZoneModel> ActivityTrimpCalculator<M> {
    /// Pick the policy per activity: zone-based with HR data, estimate without
    ///
    /// Dynamic zone tables score with their own weights; the static model uses Edwards.
    #[must_use]
    pub const fn new(zone_model: M) -> Self {
        Self {
            zone_model,
            algorithm: None,
        }
    }

    /// Always score with `algorithm`
    #[must_use]
    pub const fn with_algorithm(zone_model: M, algorithm: TrimpAlgorithm) -> Self {
        Self {
            zone_model,
            algorithm: Some(algorithm),
        }
    }

    /// Zone model used for classification
    pub const fn zone_model(&self) -> &M {
        &self.zone_model
    }

    fn resolve_algorithm(&self, input: &ActivityTrimpInput<'_>) -> TrimpAlgorithm {
        self.algorithm.unwrap_or_else(|| {
            if !input.has_heart_rate() {
                TrimpAlgorithm::Estimated
            } else if self.zone_model.model_type() == DYNAMIC_MODEL_TYPE {
                TrimpAlgorithm::Zonal
            } else {
                TrimpAlgorithm::Edwards
            }
        })
    }

    /// Score one activity
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if a zone-based policy is selected without a heart
    /// rate stream or the streams differ in length, and `AppError::InvalidParameter` if the
    /// zone model yields a negative score
    pub fn score(&self, input: &ActivityTrimpInput<'_>) -> AppResult<ActivityTrimpRecord> {
        let algorithm = self.resolve_algorithm(input);

        let mut record = ActivityTrimpRecord {
            activity_id: input.activity_id.to_owned(),
            activity_date: input.activity_date,
            trimp_score: 0.0,
            formula_version: algorithm.formula_version().to_owned(),
            calculated_at: Utc::now(),
            zone_model_type: None,
            zone_model_version: None,
            zone_snapshot: None,
            intensity_factor: input.intensity_factor,
            aerobic_efficiency: aerobic_efficiency(input),
        };

        record.trimp_score = if algorithm == TrimpAlgorithm::Estimated {
            estimate_trimp(input.duration_seconds, input.intensity_factor.unwrap_or(0.0))
        } else {
            let heart_rates = input
                .heart_rates
                .filter(|hr| !hr.is_empty())
                .ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "{} TRIMP requires a heart rate stream for activity {}",
                        algorithm.name(),
                        input.activity_id
                    ))
                })?;
            let zones = match input.elapsed_seconds {
                Some(elapsed) => TimeInZones::from_streams(heart_rates, elapsed, &self.zone_model)?,
                None => TimeInZones::from_hr_stream(heart_rates, &self.zone_model),
            };

            record.zone_model_type = Some(self.zone_model.model_type().to_owned());
            record.zone_model_version = Some(self.zone_model.model_version().to_owned());
            record.zone_snapshot = Some(self.zone_model.snapshot());
            algorithm.score_zones(zones.as_slice(), &self.zone_model)?
        };

        if !(record.trimp_score.is_finite() && record.trimp_score >= 0.0) {
            return Err(AppError::invalid_parameter(format!(
                "TRIMP for activity {} must be non-negative, got {}",
                input.activity_id, record.trimp_score
            )));
        }

        debug!(
            activity_id = input.activity_id,
            algorithm = algorithm.name(),
            trimp = record.trimp_score,
            "Scored activity TRIMP"
        );

        Ok(record)
    }
}

/// Average speed in m/min per bpm of average heart rate
fn aerobic_efficiency(input: &ActivityTrimpInput<'_>) -> Option<f64> {
    match (input.average_speed, input.average_heart_rate) {
        (Some(speed), Some(hr)) if speed > 0.0 && hr > 0.0 => {
            Some(speed * SECONDS_PER_MINUTE / hr)
        }
        _ => None,
    }
}

/// Sum activity scores per calendar day, ascending by date
#[must_use]
pub fn aggregate_daily_trimp(records: &[ActivityTrimpRecord]) -> Vec<DailyTrimp> {
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *by_day.entry(record.activity_date).or_insert(0.0) += record.trimp_score;
    }
    by_day
        .into_iter()
        .map(|(date, trimp)| DailyTrimp::new(date, trimp))
        .collect()
}
