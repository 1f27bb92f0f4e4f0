// ABOUTME: Risk status model and tier enums for form, workload ratio and ramp rate
// ABOUTME: Each tier carries its display label, color hint and interpretation sentence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Classification result for one metric
///
/// `color` is a display hint only; nothing in the engine reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskStatus<L> {
    /// Tier the value fell into
    pub level: L,
    /// Display tier name
    pub label: &'static str,
    /// UI color hint
    pub color: &'static str,
    /// Human-readable interpretation
    pub interpretation: &'static str,
}

/// Form tiers derived from Training Stress Balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormTier {
    /// TSB > 20
    OverRested,
    /// 5 < TSB <= 20
    Fresh,
    /// -10 <= TSB <= 5
    Maintenance,
    /// -30 <= TSB < -10
    Optimal,
    /// TSB < -30
    Overload,
}

impl FormTier {
    /// Expand the tier into a full status
    #[must_use]
    pub const fn status(self) -> RiskStatus<Self> {
        let (label, color, interpretation) = match self {
            Self::OverRested => (
                "Over-rested",
                "blue",
                "Fitness is fading from too much rest; resume structured training.",
            ),
            Self::Fresh => (
                "Fresh",
                "green",
                "Fatigue has cleared and form is peaked; a good window to race.",
            ),
            Self::Maintenance => (
                "Transition",
                "gray",
                "Load and recovery are balanced; fitness is being maintained.",
            ),
            Self::Optimal => (
                "Optimal training",
                "yellow",
                "Productive fatigue; the current load is building fitness.",
            ),
            Self::Overload => (
                "Overload",
                "red",
                "Fatigue far exceeds fitness; high risk of injury or illness, recover now.",
            ),
        };
        RiskStatus {
            level: self,
            label,
            color,
            interpretation,
        }
    }
}

/// Workload tiers derived from the acute:chronic ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadTier {
    /// ratio < 0.8
    UnderTraining,
    /// 0.8 <= ratio <= 1.3
    Safe,
    /// 1.3 < ratio <= 1.5
    Overreaching,
    /// ratio > 1.5
    Danger,
}

impl WorkloadTier {
    /// Expand the tier into a full status
    #[must_use]
    pub const fn status(self) -> RiskStatus<Self> {
        let (label, color, interpretation) = match self {
            Self::UnderTraining => (
                "Under-training",
                "blue",
                "Recent load is well below what you are adapted to; fitness may decline.",
            ),
            Self::Safe => (
                "Safe zone",
                "green",
                "Recent load matches your chronic load; injury risk is lowest here.",
            ),
            Self::Overreaching => (
                "Overreaching",
                "orange",
                "Recent load is climbing faster than fitness; monitor recovery closely.",
            ),
            Self::Danger => (
                "Danger zone",
                "red",
                "Acute spike far above chronic load; injury risk is sharply elevated.",
            ),
        };
        RiskStatus {
            level: self,
            label,
            color,
            interpretation,
        }
    }
}

/// Ramp-rate tiers derived from weekly CTL change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampTier {
    /// weekly delta < 0
    Unloading,
    /// 0 <= delta <= 5
    Healthy,
    /// 5 < delta <= 8
    Aggressive,
    /// delta > 8
    StructuralRisk,
}

impl RampTier {
    /// Expand the tier into a full status
    #[must_use]
    pub const fn status(self) -> RiskStatus<Self> {
        let (label, color, interpretation) = match self {
            Self::Unloading => (
                "Unloading",
                "blue",
                "Fitness is decreasing week over week; expected during taper or recovery.",
            ),
            Self::Healthy => (
                "Healthy progression",
                "green",
                "Fitness is growing at a sustainable rate.",
            ),
            Self::Aggressive => (
                "Aggressive",
                "orange",
                "Fitness is growing quickly; schedule recovery before pushing further.",
            ),
            Self::StructuralRisk => (
                "Structural risk",
                "red",
                "Load is rising faster than tendons and bones adapt; reduce volume.",
            ),
        };
        RiskStatus {
            level: self,
            label,
            color,
            interpretation,
        }
    }
}
