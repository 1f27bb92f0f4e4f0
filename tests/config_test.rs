// ABOUTME: Integration tests for environment-driven training load configuration
// ABOUTME: Tests defaults, env overrides, parse failures and validation ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use trainload::config::{ConfigError, TrainingLoadConfig};
use trainload::errors::{AppError, ErrorCode};
use trainload::logging::{LogFormat, LoggingConfig};

const VARS: [&str; 6] = [
    "TRAINING_LOAD_CTL_DAYS",
    "TRAINING_LOAD_ATL_DAYS",
    "TRAINING_LOAD_PROJECTION_DAYS",
    "TRAINING_LOAD_RAMP_MIN_SAMPLES",
    "TRAINING_LOAD_RAMP_DISPLAY_POINTS",
    "TRAINING_LOAD_FORMULA_VERSION",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_defaults() {
    let config = TrainingLoadConfig::default();
    assert!((config.ctl_days - 42.0).abs() < f64::EPSILON);
    assert!((config.atl_days - 7.0).abs() < f64::EPSILON);
    assert_eq!(config.projection_days, 7);
    assert_eq!(config.ramp_min_samples, 14);
    assert_eq!(config.ramp_display_points, 84);
    assert_eq!(config.formula_version, "ewma-v1");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_without_variables_matches_defaults() {
    clear_env();
    assert_eq!(TrainingLoadConfig::load().unwrap(), TrainingLoadConfig::default());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var("TRAINING_LOAD_CTL_DAYS", "35");
    env::set_var("TRAINING_LOAD_PROJECTION_DAYS", " 21 ");
    env::set_var("TRAINING_LOAD_FORMULA_VERSION", "ewma-v2");

    let config = TrainingLoadConfig::load().unwrap();
    clear_env();

    assert!((config.ctl_days - 35.0).abs() < f64::EPSILON);
    assert_eq!(config.projection_days, 21);
    assert_eq!(config.formula_version, "ewma-v2");
    assert!((config.atl_days - 7.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_variable_is_reported() {
    clear_env();
    env::set_var("TRAINING_LOAD_RAMP_MIN_SAMPLES", "fortnight");

    let err = TrainingLoadConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("TRAINING_LOAD_RAMP_MIN_SAMPLES")));
}

#[test]
#[serial]
fn test_invalid_range_rejected_on_load() {
    clear_env();
    env::set_var("TRAINING_LOAD_ATL_DAYS", "60");

    let err = TrainingLoadConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::InvalidRange(_)));
}

#[test]
fn test_validation_ranges() {
    let invalid = [
        TrainingLoadConfig {
            ctl_days: 0.0,
            ..TrainingLoadConfig::default()
        },
        TrainingLoadConfig {
            atl_days: f64::NAN,
            ..TrainingLoadConfig::default()
        },
        TrainingLoadConfig {
            projection_days: 0,
            ..TrainingLoadConfig::default()
        },
        TrainingLoadConfig {
            ramp_min_samples: 7,
            ..TrainingLoadConfig::default()
        },
        TrainingLoadConfig {
            ramp_display_points: 0,
            ..TrainingLoadConfig::default()
        },
        TrainingLoadConfig {
            formula_version: "  ".to_owned(),
            ..TrainingLoadConfig::default()
        },
    ];
    for config in invalid {
        assert!(config.validate().is_err(), "{config:?} accepted");
    }
}

#[test]
fn test_config_error_converts_to_app_error() {
    let err: AppError = ConfigError::InvalidRange("atl_days must be < ctl_days").into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("atl_days"));
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);

    env::set_var("LOG_FORMAT", "yaml");
    let fallback = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    assert_eq!(fallback.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_global_config_is_loaded_once() {
    clear_env();
    let first = TrainingLoadConfig::global();
    assert_eq!(first, &TrainingLoadConfig::default());

    env::set_var("TRAINING_LOAD_CTL_DAYS", "30");
    let second = TrainingLoadConfig::global();
    clear_env();

    assert!(std::ptr::eq(first, second));
    assert!((second.ctl_days - 42.0).abs() < f64::EPSILON);
}
