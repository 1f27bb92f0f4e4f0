// ABOUTME: Per-activity TRIMP record with an audit trail of the zone model that produced it
// ABOUTME: Zone snapshots capture boundaries and weights so historical scores can be explained
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One heart rate band of a zone model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBand {
    /// Zone number (1-5)
    pub zone: u8,
    /// Inclusive lower bound in bpm
    pub min_bpm: u32,
    /// Inclusive upper bound in bpm
    pub max_bpm: u32,
    /// TRIMP weight applied to minutes in this zone
    pub weight: f64,
}

/// Zone model state captured alongside a TRIMP score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneModelSnapshot {
    /// Model type tag (`static` or `dynamic`)
    pub model_type: String,
    /// Model version tag
    pub model_version: String,
    /// Ordered zone bands, zone 1 first
    pub zones: Vec<ZoneBand>,
}

/// One workout's computed load score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTrimpRecord {
    /// Provider activity identifier
    pub activity_id: String,
    /// Calendar day the activity started on
    pub activity_date: NaiveDate,
    /// Training impulse, non-negative, rounded to one decimal
    pub trimp_score: f64,
    /// Scoring policy version tag
    pub formula_version: String,
    /// When the score was computed
    pub calculated_at: DateTime<Utc>,
    /// Zone model type used, if a zone-based policy scored the activity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_model_type: Option<String>,
    /// Zone model version used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_model_version: Option<String>,
    /// Zone boundaries and weights at scoring time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_snapshot: Option<ZoneModelSnapshot>,
    /// Intensity factor used by the no-HR estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_factor: Option<f64>,
    /// Average speed (m/min) per bpm of average heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aerobic_efficiency: Option<f64>,
}
