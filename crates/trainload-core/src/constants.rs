// ABOUTME: Domain constants for training load modeling organized by concern
// ABOUTME: Time constants, heart rate zone fractions, ramp-rate windows and formula tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single list.

/// Exponential smoothing time constants
///
/// References:
/// - Banister, E.W. (1991). "Modeling elite athletic performance."
/// - Coggan, A. (2003). "Training and Racing Using a Power Meter."
pub mod training_load {
    /// Chronic Training Load time constant in days (fitness)
    pub const CTL_TIME_CONSTANT_DAYS: f64 = 42.0;

    /// Acute Training Load time constant in days (fatigue)
    pub const ATL_TIME_CONSTANT_DAYS: f64 = 7.0;

    /// ACWR reported when chronic load is zero
    pub const ACWR_ZERO_CHRONIC_SENTINEL: f64 = 0.0;

    /// Default forward projection horizon in days
    pub const DEFAULT_PROJECTION_DAYS: u32 = 7;
}

/// Heart rate zone model constants
pub mod heart_rate_zones {
    /// Number of zones in every zone model
    pub const ZONE_COUNT: usize = 5;

    /// Lower bound of each static zone as a fraction of max HR (zones 1-5)
    pub const STATIC_ZONE_FRACTIONS: [f64; ZONE_COUNT] = [0.5, 0.6, 0.7, 0.8, 0.9];

    /// Edwards zone weights (zones 1-5)
    pub const EDWARDS_WEIGHTS: [f64; ZONE_COUNT] = [1.0, 2.0, 3.0, 4.0, 5.0];

    /// Seconds credited per HR sample when no elapsed-time stream is supplied
    pub const SECONDS_PER_SAMPLE: f64 = 1.0;

    /// Zone model type tag for the max-HR derived model
    pub const STATIC_MODEL_TYPE: &str = "static";

    /// Zone model type tag for externally configured zone tables
    pub const DYNAMIC_MODEL_TYPE: &str = "dynamic";

    /// Version of the static zone breakpoints
    pub const STATIC_MODEL_VERSION: &str = "static-v1";
}

/// Ramp-rate windowing policy
pub mod ramp_rate {
    /// Days between compared CTL values
    pub const WEEK_DAYS: usize = 7;

    /// Minimum series length before any ramp-rate point is produced
    pub const MIN_SAMPLES: usize = 14;

    /// Number of weekly deltas averaged into the rolling 4-week figure
    pub const ROLLING_WEEKS: usize = 4;

    /// Maximum number of points returned (12 weeks)
    pub const DISPLAY_POINTS: usize = 84;
}

/// Time conversion constants
pub mod time {
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;

    /// Seconds per hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}

/// Formula version tags stamped on computed records
pub mod formula_versions {
    /// Daily load samples (exponential smoothing, `alpha = 1 - e^(-1/tc)`)
    pub const DAILY_LOAD: &str = "ewma-v1";

    /// Edwards fixed-weight TRIMP
    pub const TRIMP_EDWARDS: &str = "trimp-edwards-v1";

    /// Zone-model weighted TRIMP
    pub const TRIMP_ZONAL: &str = "trimp-zonal-v1";

    /// Duration and intensity factor estimate
    pub const TRIMP_ESTIMATE: &str = "trimp-estimate-v1";
}
