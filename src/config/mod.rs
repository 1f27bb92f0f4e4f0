// ABOUTME: Configuration module for the training load engine
// ABOUTME: Environment-only configuration with typed defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Training load engine configuration (time constants, windows, horizon)
pub mod training_load;

pub use error::ConfigError;
pub use training_load::TrainingLoadConfig;
