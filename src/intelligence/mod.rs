// ABOUTME: Intelligence module for training load modeling and workout scoring
// ABOUTME: Groups algorithms, load recurrence, ramp rate, risk tiers and forecasts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Numerical core of the engine. Data flows leaves first: heart-rate streams are
//! classified into zones and scored as TRIMP, daily TRIMP drives the load model,
//! and the resulting daily series feeds ramp rate, risk tiers and projections.

/// Smoothing kernel, zone models and TRIMP algorithms
pub mod algorithms;

/// Per-activity TRIMP scoring and daily aggregation
pub mod activity_trimp;

/// CTL/ATL/TSB/ACWR recurrence and daily series
pub mod training_load;

/// Week-over-week CTL growth
pub mod ramp_rate;

/// Threshold ladders mapping metrics to risk tiers
pub mod risk;

/// Zero-load forward projection and peak-day finder
pub mod forecast;

pub use activity_trimp::{aggregate_daily_trimp, ActivityTrimpCalculator, ActivityTrimpInput};
pub use forecast::{find_peak_day, Forecast, ProjectionEngine};
pub use ramp_rate::{RampRateCalculator, RampRatePoint};
pub use risk::{acr_status, assess, ramp_rate_status, tsb_status, LoadAssessment};
pub use training_load::{AthleteSeries, LoadModel};
