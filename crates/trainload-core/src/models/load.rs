// ABOUTME: Daily load sample model holding one athlete's CTL/ATL/TSB/ACWR for a calendar day
// ABOUTME: Equality ignores the computation timestamp so recomputation can be checked for determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregated training impulse for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTrimp {
    /// Calendar day
    pub date: NaiveDate,
    /// Sum of the day's activity TRIMP scores
    pub trimp: f64,
}

impl DailyTrimp {
    /// Create a daily TRIMP entry
    #[must_use]
    pub const fn new(date: NaiveDate, trimp: f64) -> Self {
        Self { date, trimp }
    }
}

/// One calendar day's training load state for one athlete
///
/// `ctl` and `atl` stay non-negative for non-negative `daily_trimp` because each is a
/// weighted average of the day's load and the previous value. `tsb` is signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLoadSample {
    /// Calendar day (no time component)
    pub date: NaiveDate,
    /// Athlete identifier
    pub user_id: Uuid,
    /// Aggregated training impulse for the day
    pub daily_trimp: f64,
    /// Chronic Training Load (fitness)
    pub ctl: f64,
    /// Acute Training Load (fatigue)
    pub atl: f64,
    /// Training Stress Balance entering the day (yesterday's CTL - ATL)
    pub tsb: f64,
    /// Acute:Chronic Workload Ratio (sentinel when CTL is zero)
    pub acwr: f64,
    /// Formula tag recorded for forward compatibility
    pub formula_version: String,
    /// When this sample was computed
    pub calculated_at: DateTime<Utc>,
}

impl DailyLoadSample {
    /// Zero-state seed for an athlete with no history, dated `date`
    #[must_use]
    pub fn seed(user_id: Uuid, date: NaiveDate, formula_version: impl Into<String>) -> Self {
        Self {
            date,
            user_id,
            daily_trimp: 0.0,
            ctl: 0.0,
            atl: 0.0,
            tsb: 0.0,
            acwr: 0.0,
            formula_version: formula_version.into(),
            calculated_at: Utc::now(),
        }
    }
}

impl PartialEq for DailyLoadSample {
    fn eq(&self, other: &Self) -> bool {
        // calculated_at is excluded: it is the only time-dependent field
        self.date == other.date
            && self.user_id == other.user_id
            && self.daily_trimp.to_bits() == other.daily_trimp.to_bits()
            && self.ctl.to_bits() == other.ctl.to_bits()
            && self.atl.to_bits() == other.atl.to_bits()
            && self.tsb.to_bits() == other.tsb.to_bits()
            && self.acwr.to_bits() == other.acwr.to_bits()
            && self.formula_version == other.formula_version
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_calculated_at() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let user = Uuid::new_v4();
        let first = DailyLoadSample::seed(user, date, "ewma-v1");
        let mut second = first.clone();
        second.calculated_at = first.calculated_at + chrono::Duration::hours(5);
        assert_eq!(first, second);

        second.ctl = 1.0;
        assert_ne!(first, second);
    }
}
