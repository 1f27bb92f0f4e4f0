// ABOUTME: Algorithm layer for exponential smoothing, heart rate zones and TRIMP scoring
// ABOUTME: Provides enum-based dispatch for TRIMP policies and a trait seam for zone models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Module
//!
//! Built-in TRIMP policies are selected through the [`TrimpAlgorithm`] enum. Zone
//! models sit behind the [`ZoneModel`] trait so an externally configured zone table
//! can replace the max-HR derived model without touching the scorers.
//!
//! # Example
//!
//! ```rust,no_run
//! use trainload::intelligence::algorithms::{StaticZoneModel, TimeInZones, TrimpAlgorithm};
//!
//! # fn main() -> trainload::errors::AppResult<()> {
//! let model = StaticZoneModel::from_max_hr(190)?;
//! let zones = TimeInZones::from_hr_stream(&[120.0, 150.0, 171.0], &model);
//! let trimp = TrimpAlgorithm::Edwards.score_zones(zones.as_slice(), &model)?;
//! # Ok(())
//! # }
//! ```

pub mod smoothing;
pub mod trimp;
pub mod zones;

pub use smoothing::{smooth, SmoothingKernel};
pub use trimp::{edwards_trimp, estimate_trimp, zonal_trimp, TrimpAlgorithm};
pub use zones::{DynamicZoneModel, HeartRateZone, StaticZoneModel, TimeInZones, ZoneModel};
