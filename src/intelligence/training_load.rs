// ABOUTME: Training load recurrence producing CTL, ATL, TSB and ACWR from daily TRIMP
// ABOUTME: Builds gap-filled daily series, forward recomputes, and parallel multi-athlete batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Load model
//!
//! - `CTL(t) = smooth(trimp(t), CTL(t-1), 42)`
//! - `ATL(t) = smooth(trimp(t), ATL(t-1), 7)`
//! - `TSB(t) = CTL(t-1) - ATL(t-1)`, readiness entering the day
//! - `ACWR(t) = ATL(t) / CTL(t)`, or the zero-chronic sentinel
//!
//! Prior state is always an explicit argument. On day 0 the prior CTL and ATL are 0.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rayon::prelude::*;
use tracing::debug;
use uuid::Uuid;

use super::algorithms::smoothing::SmoothingKernel;
use crate::config::TrainingLoadConfig;
use crate::constants::formula_versions::DAILY_LOAD;
use crate::constants::training_load::{
    ACWR_ZERO_CHRONIC_SENTINEL, ATL_TIME_CONSTANT_DAYS, CTL_TIME_CONSTANT_DAYS,
};
use crate::errors::{AppError, AppResult};
use crate::models::{DailyLoadSample, DailyTrimp};

/// One athlete's result from a batch computation
#[derive(Debug, Clone)]
pub struct AthleteSeries {
    /// Athlete identifier
    pub user_id: Uuid,
    /// Daily series, or the error that stopped this athlete
    pub result: AppResult<Vec<DailyLoadSample>>,
}

/// Calculator for daily training load state
#[derive(Debug, Clone, PartialEq)]
pub struct LoadModel {
    ctl_kernel: SmoothingKernel,
    atl_kernel: SmoothingKernel,
    formula_version: String,
}

impl Default for LoadModel {
    fn default() -> Self {
        Self {
            ctl_kernel: SmoothingKernel::from_validated(CTL_TIME_CONSTANT_DAYS),
            atl_kernel: SmoothingKernel::from_validated(ATL_TIME_CONSTANT_DAYS),
            formula_version: DAILY_LOAD.to_owned(),
        }
    }
}

/// Calendar day after `date`
pub(crate) fn next_day(date: NaiveDate) -> AppResult<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::internal(format!("Date overflow after {date}")))
}

impl LoadModel {
    /// Create a load model with custom time constants
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParameter` if either time constant is not positive
    pub fn with_time_constants(ctl_days: f64, atl_days: f64) -> AppResult<Self> {
        Ok(Self {
            ctl_kernel: SmoothingKernel::new(ctl_days)?,
            atl_kernel: SmoothingKernel::new(atl_days)?,
            formula_version: DAILY_LOAD.to_owned(),
        })
    }

    /// Create a load model from engine configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParameter` if a configured time constant is not positive
    pub fn from_config(config: &TrainingLoadConfig) -> AppResult<Self> {
        let mut model = Self::with_time_constants(config.ctl_days, config.atl_days)?;
        model.formula_version.clone_from(&config.formula_version);
        Ok(model)
    }

    /// Formula tag stamped on produced samples
    #[must_use]
    pub fn formula_version(&self) -> &str {
        &self.formula_version
    }

    /// Chronic Training Load after absorbing today's TRIMP
    #[must_use]
    pub fn ctl(&self, daily_trimp: f64, previous_ctl: f64) -> f64 {
        self.ctl_kernel.apply(daily_trimp, previous_ctl)
    }

    /// Acute Training Load after absorbing today's TRIMP
    #[must_use]
    pub fn atl(&self, daily_trimp: f64, previous_atl: f64) -> f64 {
        self.atl_kernel.apply(daily_trimp, previous_atl)
    }

    /// Training Stress Balance entering a day, from the previous day's loads
    #[must_use]
    pub const fn tsb(previous_ctl: f64, previous_atl: f64) -> f64 {
        previous_ctl - previous_atl
    }

    /// Acute:Chronic Workload Ratio, or the sentinel (0) when CTL is not positive
    #[must_use]
    pub fn acwr(atl: f64, ctl: f64) -> f64 {
        if ctl > 0.0 {
            atl / ctl
        } else {
            ACWR_ZERO_CHRONIC_SENTINEL
        }
    }

    /// Compute one day's sample from the prior day's loads
    #[must_use]
    pub fn step(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        daily_trimp: f64,
        previous_ctl: f64,
        previous_atl: f64,
        calculated_at: DateTime<Utc>,
    ) -> DailyLoadSample {
        let ctl = self.ctl(daily_trimp, previous_ctl);
        let atl = self.atl(daily_trimp, previous_atl);
        DailyLoadSample {
            date,
            user_id,
            daily_trimp,
            ctl,
            atl,
            tsb: Self::tsb(previous_ctl, previous_atl),
            acwr: Self::acwr(atl, ctl),
            formula_version: self.formula_version.clone(),
            calculated_at,
        }
    }

    /// Compute the sample for the day after `previous`
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the next calendar day is out of range
    pub fn next_sample(
        &self,
        previous: &DailyLoadSample,
        daily_trimp: f64,
    ) -> AppResult<DailyLoadSample> {
        Ok(self.step(
            previous.user_id,
            next_day(previous.date)?,
            daily_trimp,
            previous.ctl,
            previous.atl,
            Utc::now(),
        ))
    }

    /// Build one sample per calendar day covering `daily`
    ///
    /// Missing days are rest days (zero TRIMP) and duplicate dates are summed. With a
    /// `seed`, the series starts the day after the seed's date and continues from its
    /// loads; otherwise it starts on the first input day from zero history.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if `daily` is not sorted ascending, holds a
    /// negative or non-finite TRIMP, or starts on or before the seed's date
    pub fn build_series(
        &self,
        user_id: Uuid,
        daily: &[DailyTrimp],
        seed: Option<&DailyLoadSample>,
    ) -> AppResult<Vec<DailyLoadSample>> {
        let (Some(first), Some(last)) = (daily.first(), daily.last()) else {
            return Ok(Vec::new());
        };
        validate_daily(daily)?;

        let (cursor, previous_ctl, previous_atl) = match seed {
            Some(seed) if first.date <= seed.date => {
                return Err(AppError::invalid_input(format!(
                    "Daily TRIMP starting {} does not follow seed sample dated {}",
                    first.date, seed.date
                )));
            }
            Some(seed) => (next_day(seed.date)?, seed.ctl, seed.atl),
            None => (first.date, 0.0, 0.0),
        };

        let series = self.fill_days(
            user_id,
            daily,
            cursor,
            last.date,
            previous_ctl,
            previous_atl,
        )?;

        debug!(
            user_id = %user_id,
            days = series.len(),
            seeded = seed.is_some(),
            "Built training load series"
        );

        Ok(series)
    }

    /// Step one sample per day from `cursor` through `end`, summing `daily` entries per date
    fn fill_days(
        &self,
        user_id: Uuid,
        daily: &[DailyTrimp],
        mut cursor: NaiveDate,
        end: NaiveDate,
        mut previous_ctl: f64,
        mut previous_atl: f64,
    ) -> AppResult<Vec<DailyLoadSample>> {
        let calculated_at = Utc::now();
        let mut entries = daily.iter().peekable();
        let mut series = Vec::new();

        while cursor <= end {
            let mut day_trimp = 0.0;
            while let Some(entry) = entries.next_if(|entry| entry.date == cursor) {
                day_trimp += entry.trimp;
            }

            let sample = self.step(
                user_id,
                cursor,
                day_trimp,
                previous_ctl,
                previous_atl,
                calculated_at,
            );
            previous_ctl = sample.ctl;
            previous_atl = sample.atl;
            series.push(sample);
            cursor = next_day(cursor)?;
        }

        Ok(series)
    }

    /// Rebuild a series forward from the first changed day
    ///
    /// Samples dated before `changed_from` are kept as-is; the rest are recomputed from
    /// the last kept sample using the entries of `daily` on or after `changed_from`.
    /// The rebuilt series runs through the later of the last existing day and the last
    /// input day, so days left without input become rest days.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` under the same conditions as [`Self::build_series`]
    pub fn recompute_from(
        &self,
        user_id: Uuid,
        existing: &[DailyLoadSample],
        daily: &[DailyTrimp],
        changed_from: NaiveDate,
    ) -> AppResult<Vec<DailyLoadSample>> {
        let kept = existing.partition_point(|sample| sample.date < changed_from);
        let mut series = existing[..kept].to_vec();
        let changed = &daily[daily.partition_point(|entry| entry.date < changed_from)..];
        validate_daily(changed)?;

        let end = match (existing.last(), changed.last()) {
            (Some(sample), Some(entry)) => Some(sample.date.max(entry.date)),
            (Some(sample), None) => Some(sample.date),
            (None, Some(entry)) => Some(entry.date),
            (None, None) => None,
        };
        let start = match existing[..kept].last() {
            Some(seed) => Some((next_day(seed.date)?, seed.ctl, seed.atl)),
            None => changed
                .first()
                .map(|entry| entry.date)
                .or_else(|| existing.get(kept).map(|sample| sample.date))
                .map(|date| (date, 0.0, 0.0)),
        };

        debug!(
            user_id = %user_id,
            kept_days = kept,
            changed_from = %changed_from,
            "Recomputing training load series"
        );

        if let (Some((cursor, ctl, atl)), Some(end)) = (start, end) {
            series.extend(self.fill_days(user_id, changed, cursor, end, ctl, atl)?);
        }
        Ok(series)
    }

    /// Build series for many athletes in parallel
    ///
    /// Results keep the input order; one athlete's invalid input does not affect others.
    #[must_use]
    pub fn compute_batch(&self, athletes: &[(Uuid, Vec<DailyTrimp>)]) -> Vec<AthleteSeries> {
        debug!(athletes = athletes.len(), "Computing training load batch");
        athletes
            .par_iter()
            .map(|(user_id, daily)| AthleteSeries {
                user_id: *user_id,
                result: self.build_series(*user_id, daily, None),
            })
            .collect()
    }
}

fn validate_daily(daily: &[DailyTrimp]) -> AppResult<()> {
    if let Some(pair) = daily.windows(2).find(|pair| pair[1].date < pair[0].date) {
        return Err(AppError::invalid_input(format!(
            "Daily TRIMP must be sorted by date ascending ({} after {})",
            pair[1].date, pair[0].date
        )));
    }
    if let Some(entry) = daily
        .iter()
        .find(|entry| !(entry.trimp.is_finite() && entry.trimp >= 0.0))
    {
        return Err(AppError::invalid_input(format!(
            "Daily TRIMP must be a non-negative number, got {} on {}",
            entry.trimp, entry.date
        )));
    }
    Ok(())
}
