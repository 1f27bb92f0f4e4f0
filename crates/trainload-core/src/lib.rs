// ABOUTME: Core types and constants for the training load modeling engine
// ABOUTME: Foundation crate with error handling, domain constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainload Core
//!
//! Foundation crate providing shared types and constants for the training load
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Time constants, zone fractions, ramp-rate windows and formula tags
//! - **models**: Daily load samples, per-activity TRIMP records and risk statuses

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (`DailyLoadSample`, `ActivityTrimpRecord`, `RiskStatus`)
pub mod models;
