// ABOUTME: Tests for engine configuration defaults, validation, and environment overrides
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use std::env;

use anyhow::Result;
use blendwise::config::{ConfigError, EngineConfig, SubscriptionTemplate};
use blendwise::errors::{EngineError, ErrorCode};
use blendwise::logging::{LogFormat, LoggingConfig};
use common::init_test_logging;
use serial_test::serial;

const OVERRIDE_VARS: [&str; 5] = [
    "BLENDWISE_LIQUID_ML",
    "BLENDWISE_MIN_MATCH_SCORE",
    "BLENDWISE_BASE_DRINK_PRICE",
    "BLENDWISE_WEIGHT_GOAL",
    "BLENDWISE_MAX_SHOPS",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Default and Validation Tests
// ============================================================================

#[test]
fn test_defaults_are_valid() -> Result<()> {
    init_test_logging();
    let config = EngineConfig::default();
    config.validate()?;

    assert!((config.matching.estimates.base_drink_price - 8.99).abs() < f64::EPSILON);
    assert_eq!(config.matching.thresholds.min_score, 30);
    assert_eq!(config.recommendation.limits.max_shops, 5);
    assert!((config.recommendation.weights.total() - 1.0).abs() < 1e-9);
    assert_eq!(config.recommendation.subscription_plans.len(), 3);
    Ok(())
}

#[test]
fn test_weights_must_sum_to_one() {
    init_test_logging();
    let mut config = EngineConfig::default();
    config.recommendation.weights.goal = 0.6;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_substitution_must_weigh_less_than_exact() {
    init_test_logging();
    let mut config = EngineConfig::default();
    config.matching.weights.substitution = 1.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_threshold_must_sit_below_partial_ceiling() {
    init_test_logging();
    let mut config = EngineConfig::default();
    config.matching.thresholds.min_score = 99;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_budget_bands_must_ascend() {
    init_test_logging();
    let mut config = EngineConfig::default();
    config.recommendation.budget_bands.basic.max = 20.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_subscription_discount_in_range() {
    init_test_logging();
    let mut config = EngineConfig::default();
    config.recommendation.subscription_plans = SubscriptionTemplate::defaults();
    config.recommendation.subscription_plans[0].discount = 1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_config_error_converts_to_engine_error() {
    init_test_logging();
    let error: EngineError = ConfigError::InvalidWeights("bad").into();
    assert_eq!(error.code(), ErrorCode::ConfigInvalid);
    assert!(!error.code().is_client_error());
}

// ============================================================================
// Environment Override Tests
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_apply() -> Result<()> {
    init_test_logging();
    clear_overrides();
    env::set_var("BLENDWISE_LIQUID_ML", "200");
    env::set_var("BLENDWISE_MIN_MATCH_SCORE", "50");
    env::set_var("BLENDWISE_BASE_DRINK_PRICE", "7.5");
    env::set_var("BLENDWISE_MAX_SHOPS", "8");

    let config = EngineConfig::load();
    clear_overrides();
    let config = config?;

    assert!((config.composition.amounts.liquid_ml - 200.0).abs() < f64::EPSILON);
    assert_eq!(config.matching.thresholds.min_score, 50);
    assert!((config.matching.estimates.base_drink_price - 7.5).abs() < f64::EPSILON);
    assert_eq!(config.recommendation.limits.max_shops, 8);
    Ok(())
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    init_test_logging();
    clear_overrides();
    env::set_var("BLENDWISE_MIN_MATCH_SCORE", "plenty");

    let result = EngineConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    init_test_logging();
    clear_overrides();
    env::set_var("BLENDWISE_WEIGHT_GOAL", "0.9");

    let result = EngineConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));
}

// ============================================================================
// Logging Configuration Tests
// ============================================================================

#[test]
#[serial]
fn test_logging_config_from_env() {
    init_test_logging();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "true");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");

    assert!(matches!(config.format, LogFormat::Json));
    assert!(config.include_location);
    assert!("yaml".parse::<LogFormat>().is_err());
}

#[test]
fn test_second_logging_init_reports_logging_error() {
    // init_test_logging has already installed the global subscriber
    init_test_logging();
    let error = LoggingConfig::default().init().unwrap_err();

    assert!(matches!(error, EngineError::Logging(_)));
    assert_eq!(error.code(), ErrorCode::LoggingInitFailed);
    assert!(!error.code().is_client_error());
}
