// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, date helpers, and daily TRIMP/sample builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `trainload`

use std::sync::Once;

use chrono::{Days, NaiveDate, Utc};
use trainload::constants::formula_versions::DAILY_LOAD;
use trainload::models::{DailyLoadSample, DailyTrimp};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Absolute tolerance for values quoted to two decimals
pub const TOLERANCE: f64 = 0.01;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed start date so expectations do not depend on the wall clock
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// `start_date() + offset` days
pub fn day(offset: u64) -> NaiveDate {
    start_date().checked_add_days(Days::new(offset)).unwrap()
}

/// Consecutive days starting at `start_date()` with the given TRIMP values
pub fn daily_trimp(values: &[f64]) -> Vec<DailyTrimp> {
    values
        .iter()
        .enumerate()
        .map(|(i, &trimp)| DailyTrimp::new(day(i as u64), trimp))
        .collect()
}

/// `days` consecutive days of constant TRIMP
pub fn constant_trimp(days: usize, trimp: f64) -> Vec<DailyTrimp> {
    daily_trimp(&vec![trimp; days])
}

/// Hand-built sample with the given loads
pub fn sample(date: NaiveDate, ctl: f64, atl: f64, tsb: f64) -> DailyLoadSample {
    DailyLoadSample {
        date,
        user_id: Uuid::nil(),
        daily_trimp: 0.0,
        ctl,
        atl,
        tsb,
        acwr: if ctl > 0.0 { atl / ctl } else { 0.0 },
        formula_version: DAILY_LOAD.to_owned(),
        calculated_at: Utc::now(),
    }
}

/// Assert `actual` is within `TOLERANCE` of `expected`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected} +/- {TOLERANCE}, got {actual}"
    );
}
