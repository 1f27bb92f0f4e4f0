// ABOUTME: Main library entry point for the training load modeling engine
// ABOUTME: Fitness/fatigue/form recurrence, TRIMP scoring, ramp rate, risk tiers and forecasts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainload
//!
//! Turns daily training-impulse values into a continuously updated physiological
//! load model: chronic fitness (CTL), acute fatigue (ATL), form (TSB), the
//! acute:chronic workload ratio and a rest-day projection with its peak day.
//! Heart-rate streams are reduced to one TRIMP score per workout.
//!
//! Every operation is a pure function of its explicit arguments. Yesterday's state
//! is always passed in, never read from ambient storage, so the engine can be
//! called concurrently for any number of athletes.
//!
//! ## Architecture
//!
//! - **`intelligence::algorithms`**: smoothing kernel, zone models, TRIMP policies
//! - **`intelligence::training_load`**: CTL/ATL/TSB/ACWR recurrence and daily series
//! - **`intelligence::activity_trimp`**: per-activity scoring into audit records
//! - **`intelligence::ramp_rate`**: week-over-week CTL growth
//! - **`intelligence::risk`**: threshold ladders into display tiers
//! - **`intelligence::forecast`**: zero-load projection and peak day
//! - **`config`**: environment-driven engine configuration
//! - **`logging`**: `tracing` subscriber setup for embedding services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use trainload::intelligence::forecast::ProjectionEngine;
//! use trainload::intelligence::training_load::LoadModel;
//! use trainload::models::DailyTrimp;
//! use uuid::Uuid;
//!
//! # fn main() -> trainload::errors::AppResult<()> {
//! let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default();
//! let daily = vec![DailyTrimp::new(day, 120.0)];
//! let series = LoadModel::default().build_series(Uuid::new_v4(), &daily, None)?;
//! if let Some(today) = series.last() {
//!     let forecast = ProjectionEngine::default().forecast(today)?;
//!     println!("peak form on {:?}", forecast.peak.map(|p| p.date));
//! }
//! # Ok(())
//! # }
//! ```

/// Unified error handling (re-exported from `trainload-core`)
pub mod errors;

/// Domain constants (re-exported from `trainload-core`)
pub use trainload_core::constants;

/// Data models (re-exported from `trainload-core`)
pub use trainload_core::models;

/// Environment-driven engine configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Training load algorithms and analysis
pub mod intelligence;
