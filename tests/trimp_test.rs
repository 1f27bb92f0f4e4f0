// ABOUTME: Integration tests for TRIMP scoring policies and per-activity records
// ABOUTME: Tests Edwards, zone-weighted and no-HR estimate scoring plus daily aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, day, init_test_logging};
use trainload::constants::formula_versions::{TRIMP_EDWARDS, TRIMP_ESTIMATE, TRIMP_ZONAL};
use trainload::intelligence::algorithms::{
    edwards_trimp, estimate_trimp, zonal_trimp, DynamicZoneModel, StaticZoneModel, TrimpAlgorithm,
};
use trainload::intelligence::{aggregate_daily_trimp, ActivityTrimpCalculator, ActivityTrimpInput};
use trainload::models::ZoneBand;

fn weighted_bands(weights: [f64; 5]) -> Vec<ZoneBand> {
    let edges = [(100, 119), (120, 139), (140, 159), (160, 179), (180, 200)];
    edges
        .iter()
        .zip(weights)
        .enumerate()
        .map(|(i, (&(min_bpm, max_bpm), weight))| ZoneBand {
            zone: i as u8 + 1,
            min_bpm,
            max_bpm,
            weight,
        })
        .collect()
}

#[test]
fn test_edwards_weights_minutes_in_zone() {
    assert_close(edwards_trimp(&[600.0; 5]).unwrap(), 150.0);
    assert_close(edwards_trimp(&[60.0, 120.0, 0.0, 0.0, 0.0]).unwrap(), 5.0);
    assert_close(edwards_trimp(&[0.0; 5]).unwrap(), 0.0);
}

#[test]
fn test_edwards_rounds_to_one_decimal() {
    // 100 s in zone 1 is 1.666.. minutes
    let score = edwards_trimp(&[100.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    assert!((score - 1.7).abs() < 1e-9);
}

#[test]
fn test_zone_scorers_require_five_zones() {
    let model = StaticZoneModel::from_max_hr(190).unwrap();
    for bad in [&[60.0; 4][..], &[60.0; 6][..], &[][..]] {
        assert!(edwards_trimp(bad).unwrap_err().is_invalid_input());
        assert!(zonal_trimp(bad, &model).unwrap_err().is_invalid_input());
    }
}

#[test]
fn test_zone_scorers_reject_negative_time() {
    let err = edwards_trimp(&[60.0, -1.0, 0.0, 0.0, 0.0]).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_zonal_uses_model_weights() {
    let model = DynamicZoneModel::new(weighted_bands([1.0, 1.5, 2.5, 4.0, 6.0]), "lab-2025").unwrap();
    let score = zonal_trimp(&[600.0, 600.0, 0.0, 0.0, 300.0], &model).unwrap();
    assert_close(score, 10.0 + 15.0 + 30.0);

    let static_model = StaticZoneModel::from_max_hr(200).unwrap();
    assert_close(
        zonal_trimp(&[600.0; 5], &static_model).unwrap(),
        edwards_trimp(&[600.0; 5]).unwrap(),
    );
}

#[test]
fn test_estimate_without_heart_rate() {
    assert_close(estimate_trimp(3600.0, 0.8), 64.0);
    assert_close(estimate_trimp(5400.0, 1.0), 150.0);
    assert!(estimate_trimp(0.0, 0.9).abs() < f64::EPSILON);
    assert!(estimate_trimp(3600.0, -0.5).abs() < f64::EPSILON);
    assert!(estimate_trimp(-60.0, 0.9).abs() < f64::EPSILON);
}

#[test]
fn test_algorithm_metadata_and_parsing() {
    assert_eq!(TrimpAlgorithm::default(), TrimpAlgorithm::Edwards);
    assert_eq!(TrimpAlgorithm::Edwards.formula_version(), TRIMP_EDWARDS);
    assert_eq!(TrimpAlgorithm::Zonal.formula_version(), TRIMP_ZONAL);
    assert_eq!(TrimpAlgorithm::Estimated.formula_version(), TRIMP_ESTIMATE);
    assert_eq!("edwards".parse::<TrimpAlgorithm>().unwrap(), TrimpAlgorithm::Edwards);
    assert!("banister".parse::<TrimpAlgorithm>().is_err());

    let model = StaticZoneModel::from_max_hr(200).unwrap();
    assert!(TrimpAlgorithm::Estimated
        .score_zones(&[60.0; 5], &model)
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn test_activity_with_heart_rate_uses_edwards() {
    init_test_logging();
    let calculator = ActivityTrimpCalculator::new(StaticZoneModel::from_max_hr(200).unwrap());
    let heart_rates = vec![150.0; 600];
    let input = ActivityTrimpInput::new("run-1", day(0), 600.0)
        .heart_rates(&heart_rates)
        .averages(3.0, 150.0);

    let record = calculator.score(&input).unwrap();

    assert_close(record.trimp_score, 30.0);
    assert_eq!(record.formula_version, TRIMP_EDWARDS);
    assert_eq!(record.zone_model_type.as_deref(), Some("static"));
    assert!(record.zone_snapshot.is_some());
    assert_close(record.aerobic_efficiency.unwrap(), 1.2);
}

#[test]
fn test_activity_without_heart_rate_is_estimated() {
    let calculator = ActivityTrimpCalculator::new(StaticZoneModel::from_max_hr(185).unwrap());
    let input = ActivityTrimpInput::new("ride-7", day(1), 3600.0).intensity_factor(0.8);

    let record = calculator.score(&input).unwrap();

    assert_close(record.trimp_score, 64.0);
    assert_eq!(record.formula_version, TRIMP_ESTIMATE);
    assert!(record.zone_model_type.is_none());
    assert!(record.aerobic_efficiency.is_none());
}

#[test]
fn test_activity_with_dynamic_zones_is_zonal() {
    let model = DynamicZoneModel::new(weighted_bands([1.0, 2.0, 3.0, 5.0, 8.0]), "v2").unwrap();
    let calculator = ActivityTrimpCalculator::new(model);
    let heart_rates = vec![185.0; 120];
    let elapsed: Vec<f64> = (0..120_u32).map(f64::from).collect();
    let input = ActivityTrimpInput::new("intervals", day(2), 120.0)
        .heart_rates(&heart_rates)
        .elapsed_seconds(&elapsed);

    let record = calculator.score(&input).unwrap();

    assert_close(record.trimp_score, 16.0);
    assert_eq!(record.formula_version, TRIMP_ZONAL);
    assert_eq!(record.zone_model_version.as_deref(), Some("v2"));
}

#[test]
fn test_forced_zone_policy_requires_heart_rate() {
    let calculator = ActivityTrimpCalculator::with_algorithm(
        StaticZoneModel::from_max_hr(190).unwrap(),
        TrimpAlgorithm::Edwards,
    );
    let input = ActivityTrimpInput::new("swim", day(0), 1800.0).intensity_factor(0.7);
    assert!(calculator.score(&input).unwrap_err().is_invalid_input());
}

#[test]
fn test_aggregate_daily_trimp_sums_by_day() {
    let calculator = ActivityTrimpCalculator::new(StaticZoneModel::from_max_hr(190).unwrap());
    let records: Vec<_> = [(day(1), 0.8), (day(0), 1.0), (day(1), 0.5)]
        .iter()
        .enumerate()
        .map(|(i, &(date, intensity))| {
            let id = format!("a{i}");
            let input = ActivityTrimpInput::new(&id, date, 3600.0).intensity_factor(intensity);
            calculator.score(&input).unwrap()
        })
        .collect();

    let daily = aggregate_daily_trimp(&records);

    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].date, day(0));
    assert_close(daily[0].trimp, 100.0);
    assert_eq!(daily[1].date, day(1));
    assert_close(daily[1].trimp, 64.0 + 25.0);
}
