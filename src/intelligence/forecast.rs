// ABOUTME: Rest-day projection of CTL/ATL/TSB and detection of the peak-form day
// ABOUTME: Runs the load recurrence forward with zero daily TRIMP from today's sample
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::training_load::{next_day, LoadModel};
use crate::config::TrainingLoadConfig;
use crate::constants::training_load::DEFAULT_PROJECTION_DAYS;
use crate::errors::{AppError, AppResult};
use crate::models::DailyLoadSample;

/// Projected days and the best-form day among them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// One sample per future day, ascending
    pub projections: Vec<DailyLoadSample>,
    /// Projected day with the highest TSB
    pub peak: Option<DailyLoadSample>,
}

/// Projects load state forward assuming complete rest
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionEngine {
    model: LoadModel,
    horizon_days: u32,
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self {
            model: LoadModel::default(),
            horizon_days: DEFAULT_PROJECTION_DAYS,
        }
    }
}

impl ProjectionEngine {
    /// Projection engine using `model` over `horizon_days`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParameter` if `horizon_days` is zero
    pub fn new(model: LoadModel, horizon_days: u32) -> AppResult<Self> {
        if horizon_days == 0 {
            return Err(AppError::invalid_parameter(
                "Projection horizon must be at least one day",
            ));
        }
        Ok(Self {
            model,
            horizon_days,
        })
    }

    /// Projection engine from engine configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParameter` if a time constant or the horizon is invalid
    pub fn from_config(config: &TrainingLoadConfig) -> AppResult<Self> {
        Self::new(LoadModel::from_config(config)?, config.projection_days)
    }

    /// Same model, different horizon
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParameter` if `horizon_days` is zero
    pub fn with_horizon(&self, horizon_days: u32) -> AppResult<Self> {
        Self::new(self.model.clone(), horizon_days)
    }

    /// Number of days projected
    #[must_use]
    pub const fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Project `horizon_days` rest days after `current`
    ///
    /// Day `k` is dated `current.date + k`, carries zero TRIMP, and its TSB is the
    /// previous projected day's CTL minus ATL.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a projected date is out of range
    pub fn project(&self, current: &DailyLoadSample) -> AppResult<Vec<DailyLoadSample>> {
        let calculated_at = Utc::now();
        let mut projections = Vec::with_capacity(self.horizon_days as usize);
        let (mut date, mut ctl, mut atl) = (current.date, current.ctl, current.atl);

        for _ in 0..self.horizon_days {
            date = next_day(date)?;
            let day = self
                .model
                .step(current.user_id, date, 0.0, ctl, atl, calculated_at);
            ctl = day.ctl;
            atl = day.atl;
            projections.push(day);
        }

        debug!(
            user_id = %current.user_id,
            from = %current.date,
            days = projections.len(),
            "Projected training load"
        );

        Ok(projections)
    }

    /// Project from `current` and locate the peak-form day
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a projected date is out of range
    pub fn forecast(&self, current: &DailyLoadSample) -> AppResult<Forecast> {
        let projections = self.project(current)?;
        let peak = find_peak_day(&projections).cloned();
        Ok(Forecast { projections, peak })
    }
}

/// Day with the highest TSB; ties go to the earliest day
///
/// Only a strictly greater TSB replaces the current best, so `0.0` and `-0.0` tie and
/// a NaN TSB never displaces an earlier day.
#[must_use]
pub fn find_peak_day(projections: &[DailyLoadSample]) -> Option<&DailyLoadSample> {
    projections
        .iter()
        .reduce(|best, day| if day.tsb > best.tsb { day } else { best })
}
