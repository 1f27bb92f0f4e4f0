// ABOUTME: Core data models for daily load state, per-activity TRIMP and risk tiers
// ABOUTME: Plain structured data exchanged with persistence and presentation collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-activity TRIMP records and zone model audit snapshots
pub mod activity;
/// Daily load samples and daily TRIMP inputs
pub mod load;
/// Risk statuses and tier enums
pub mod risk;

pub use activity::{ActivityTrimpRecord, ZoneBand, ZoneModelSnapshot};
pub use load::{DailyLoadSample, DailyTrimp};
pub use risk::{FormTier, RampTier, RiskStatus, WorkloadTier};
