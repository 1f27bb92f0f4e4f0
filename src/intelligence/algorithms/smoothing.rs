// ABOUTME: Exponential smoothing kernel parameterized by a time constant in days
// ABOUTME: Discretized exponential decay shared by the CTL and ATL recurrences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Exponential smoothing with a fixed time constant
///
/// Formula: `α = 1 - e^(-1/τ)`, `S_t = α x load_t + (1-α) x S_{t-1}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingKernel {
    time_constant_days: f64,
    alpha: f64,
}

impl SmoothingKernel {
    /// Create a kernel for the given time constant
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidParameter` if `time_constant_days` is not a positive,
    /// finite number
    pub fn new(time_constant_days: f64) -> AppResult<Self> {
        if !(time_constant_days.is_finite() && time_constant_days > 0.0) {
            return Err(AppError::invalid_parameter(format!(
                "Time constant must be positive, got {time_constant_days}"
            ))
            .with_details(serde_json::json!({ "time_constant_days": time_constant_days })));
        }

        Ok(Self::from_validated(time_constant_days))
    }

    /// Kernel for a time constant already known to be positive and finite
    pub(crate) fn from_validated(time_constant_days: f64) -> Self {
        Self {
            time_constant_days,
            alpha: 1.0 - (-1.0 / time_constant_days).exp(),
        }
    }

    /// Fraction of the day's load absorbed into the smoothed value
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Time constant in days
    #[must_use]
    pub const fn time_constant_days(&self) -> f64 {
        self.time_constant_days
    }

    /// Advance the smoothed value by one day
    #[must_use]
    pub fn apply(&self, today_load: f64, yesterday_smoothed: f64) -> f64 {
        today_load.mul_add(self.alpha, yesterday_smoothed * (1.0 - self.alpha))
    }
}

/// Advance an exponentially smoothed value by one day
///
/// # Errors
///
/// Returns `AppError::InvalidParameter` if `time_constant_days <= 0`
pub fn smooth(
    today_load: f64,
    yesterday_smoothed: f64,
    time_constant_days: f64,
) -> AppResult<f64> {
    Ok(SmoothingKernel::new(time_constant_days)?.apply(today_load, yesterday_smoothed))
}
