// ABOUTME: Benchmark fixtures for generating daily TRIMP histories and heart rate streams
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating realistic training data.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use chrono::{Days, NaiveDate};
use trainload::models::DailyTrimp;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// One season (180 days)
    Season,
    /// Two years (730 days) - typical active user
    TwoYears,
    /// Ten years (3650 days) - long-time user
    Decade,
}

impl HistoryLength {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Season => 180,
            Self::TwoYears => 730,
            Self::Decade => 3650,
        }
    }
}

/// Weekly pattern: long day, rest day, intervals, easy days
const WEEKLY_PATTERN: [f64; 7] = [180.0, 0.0, 140.0, 60.0, 90.0, 0.0, 75.0];

/// Generate a daily TRIMP history with a weekly pattern and slow progression
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_daily_trimp(length: HistoryLength) -> Vec<DailyTrimp> {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or_default();
    (0..length.days())
        .filter_map(|i| {
            let date = start.checked_add_days(Days::new(i as u64))?;
            let progression = 1.0 + ((i / 28) % 6) as f64 * 0.05;
            Some(DailyTrimp::new(date, WEEKLY_PATTERN[i % 7] * progression))
        })
        .collect()
}

/// Generate a one-second heart rate stream oscillating across all zones
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_hr_stream(seconds: usize) -> Vec<f64> {
    (0..seconds)
        .map(|i| 95.0 + ((i * 7) % 100) as f64)
        .collect()
}
