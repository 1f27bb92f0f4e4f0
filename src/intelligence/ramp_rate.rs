// ABOUTME: Ramp-rate derivative of CTL: week-over-week change and its rolling 4-week mean
// ABOUTME: Applies the minimum-data and display-window policies to a daily load series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::TrainingLoadConfig;
use crate::constants::ramp_rate::{DISPLAY_POINTS, MIN_SAMPLES, ROLLING_WEEKS, WEEK_DAYS};
use crate::models::DailyLoadSample;

/// Ramp rate on one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampRatePoint {
    /// Calendar day
    pub date: NaiveDate,
    /// CTL on that day
    pub ctl: f64,
    /// `ctl[i] - ctl[i-7]`
    pub weekly_delta: f64,
    /// Mean of the weekly deltas at `i`, `i-7`, `i-14`, `i-21` that exist
    pub rolling_average: f64,
}

/// Computes ramp-rate points from an ascending daily series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampRateCalculator {
    min_samples: usize,
    display_points: usize,
}

impl Default for RampRateCalculator {
    fn default() -> Self {
        Self {
            min_samples: MIN_SAMPLES,
            display_points: DISPLAY_POINTS,
        }
    }
}

impl RampRateCalculator {
    /// Calculator using the configured windows
    #[must_use]
    pub fn from_config(config: &TrainingLoadConfig) -> Self {
        Self {
            min_samples: config.ramp_min_samples.max(WEEK_DAYS + 1),
            display_points: config.ramp_display_points,
        }
    }

    /// Ramp-rate points for `series`, ascending by date
    ///
    /// Returns nothing for fewer than the minimum samples (14 by default); with exactly
    /// the minimum one point is produced. Only the last `display_points` are kept.
    #[must_use]
    pub fn calculate(&self, series: &[DailyLoadSample]) -> Vec<RampRatePoint> {
        if series.len() < self.min_samples {
            return Vec::new();
        }

        let delta = |i: usize| series[i].ctl - series[i - WEEK_DAYS].ctl;

        let mut points: Vec<RampRatePoint> = (self.min_samples - 1..series.len())
            .map(|i| {
                let deltas: Vec<f64> = (0..ROLLING_WEEKS)
                    .map_while(|week| i.checked_sub(week * WEEK_DAYS))
                    .filter(|&j| j >= WEEK_DAYS)
                    .map(delta)
                    .collect();
                RampRatePoint {
                    date: series[i].date,
                    ctl: series[i].ctl,
                    weekly_delta: delta(i),
                    rolling_average: deltas.iter().sum::<f64>() / deltas.len() as f64,
                }
            })
            .collect();

        if points.len() > self.display_points {
            points.drain(..points.len() - self.display_points);
        }
        points
    }
}
