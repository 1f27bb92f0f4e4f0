// ABOUTME: Threshold ladders mapping TSB, acute:chronic ratio and ramp rate to risk tiers
// ABOUTME: Total functions: every real input, including non-finite values, lands in a tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Risk classification
//!
//! Each ladder is checked top to bottom and the first matching tier wins. NaN has no
//! ordering, so it is placed by its sign bit into the outermost tier on that side.

use serde::Serialize;

use crate::models::{DailyLoadSample, FormTier, RampTier, RiskStatus, WorkloadTier};

/// TSB above which the athlete is over-rested
const TSB_OVER_RESTED: f64 = 20.0;
/// TSB above which the athlete is fresh
const TSB_FRESH: f64 = 5.0;
/// TSB at or above which load is in transition/maintenance
const TSB_MAINTENANCE: f64 = -10.0;
/// TSB at or above which load is an optimal training stimulus
const TSB_OPTIMAL: f64 = -30.0;

/// Ratio below which the athlete is under-training
const ACR_UNDER_TRAINING: f64 = 0.8;
/// Upper bound of the safe ratio band
const ACR_SAFE: f64 = 1.3;
/// Upper bound of the overreaching ratio band
const ACR_OVERREACHING: f64 = 1.5;

/// Upper bound of healthy weekly CTL growth
const RAMP_HEALTHY: f64 = 5.0;
/// Upper bound of aggressive weekly CTL growth
const RAMP_AGGRESSIVE: f64 = 8.0;

/// Classify form from Training Stress Balance
#[must_use]
pub fn tsb_status(tsb: f64) -> RiskStatus<FormTier> {
    let tier = if tsb.is_nan() {
        if tsb.is_sign_negative() {
            FormTier::Overload
        } else {
            FormTier::OverRested
        }
    } else if tsb > TSB_OVER_RESTED {
        FormTier::OverRested
    } else if tsb > TSB_FRESH {
        FormTier::Fresh
    } else if tsb >= TSB_MAINTENANCE {
        FormTier::Maintenance
    } else if tsb >= TSB_OPTIMAL {
        FormTier::Optimal
    } else {
        FormTier::Overload
    };
    tier.status()
}

/// Classify the acute:chronic ratio; a non-positive CTL yields ratio 0
#[must_use]
pub fn acr_status(atl: f64, ctl: f64) -> RiskStatus<WorkloadTier> {
    let ratio = if ctl > 0.0 { atl / ctl } else { 0.0 };
    let tier = if ratio.is_nan() {
        if ratio.is_sign_negative() {
            WorkloadTier::UnderTraining
        } else {
            WorkloadTier::Danger
        }
    } else if ratio < ACR_UNDER_TRAINING {
        WorkloadTier::UnderTraining
    } else if ratio <= ACR_SAFE {
        WorkloadTier::Safe
    } else if ratio <= ACR_OVERREACHING {
        WorkloadTier::Overreaching
    } else {
        WorkloadTier::Danger
    };
    tier.status()
}

/// Classify weekly CTL change
#[must_use]
pub fn ramp_rate_status(weekly_delta: f64) -> RiskStatus<RampTier> {
    let tier = if weekly_delta.is_nan() {
        if weekly_delta.is_sign_negative() {
            RampTier::Unloading
        } else {
            RampTier::StructuralRisk
        }
    } else if weekly_delta < 0.0 {
        RampTier::Unloading
    } else if weekly_delta <= RAMP_HEALTHY {
        RampTier::Healthy
    } else if weekly_delta <= RAMP_AGGRESSIVE {
        RampTier::Aggressive
    } else {
        RampTier::StructuralRisk
    };
    tier.status()
}

/// Calculate recommended recovery days based on TSB
#[must_use]
pub fn recommend_recovery_days(tsb: f64) -> u32 {
    const SEVERE_FATIGUE: f64 = -30.0;
    const DEEP_FATIGUE: f64 = -20.0;
    const MODERATE_FATIGUE: f64 = -10.0;
    const LIGHT_FATIGUE: f64 = 0.0;

    if tsb < SEVERE_FATIGUE {
        return 5;
    }
    if tsb < DEEP_FATIGUE {
        return 3;
    }
    if tsb < MODERATE_FATIGUE {
        return 2;
    }
    if tsb < LIGHT_FATIGUE {
        return 1;
    }
    0
}

/// All three classifications for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadAssessment {
    /// Form tier from the sample's TSB
    pub form: RiskStatus<FormTier>,
    /// Workload tier from the sample's ATL and CTL
    pub workload: RiskStatus<WorkloadTier>,
    /// Ramp tier from the supplied weekly CTL change
    pub ramp: RiskStatus<RampTier>,
    /// Suggested rest days before hard training
    pub recovery_days: u32,
}

/// Classify a daily sample together with its weekly ramp rate
#[must_use]
pub fn assess(sample: &DailyLoadSample, weekly_ramp: f64) -> LoadAssessment {
    LoadAssessment {
        form: tsb_status(sample.tsb),
        workload: acr_status(sample.atl, sample.ctl),
        ramp: ramp_rate_status(weekly_ramp),
        recovery_days: recommend_recovery_days(sample.tsb),
    }
}
