// ABOUTME: Integration tests for environment-driven configuration and logging setup
// ABOUTME: Defaults, overrides, parse failures, range checks, and log format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use forma::config::environment::{
    ANALYZER_LATENCY_VAR, BACKFILL_THRESHOLD_VAR, INCLUDE_IMAGES_VAR, SELECTION_SEED_VAR,
};
use forma::config::{ConfigError, FormaConfig};
use forma::errors::{AppError, ErrorCode};
use forma::forma_core::constants::nutrition::MAX_ANALYZER_LATENCY_MS;
use forma::logging::{LogFormat, LoggingConfig};
use forma::SelectionSeed;
use serial_test::serial;
use std::env;
use std::time::Duration;

const ALL_VARS: [&str; 4] = [
    ANALYZER_LATENCY_VAR,
    SELECTION_SEED_VAR,
    BACKFILL_THRESHOLD_VAR,
    INCLUDE_IMAGES_VAR,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    common::init_test_logging();
    clear_env();

    let config = FormaConfig::from_env().unwrap();
    assert_eq!(config.analyzer_latency(), Duration::from_millis(3_000));
    assert_eq!(config.selection_seed, None);
    assert_eq!(config.engine.backfill_threshold, 3);
    assert!(config.engine.include_images);
}

#[test]
#[serial]
fn test_overrides_are_parsed() {
    clear_env();
    env::set_var(ANALYZER_LATENCY_VAR, "250");
    env::set_var(SELECTION_SEED_VAR, " 42 ");
    env::set_var(BACKFILL_THRESHOLD_VAR, "2");
    env::set_var(INCLUDE_IMAGES_VAR, "off");

    let config = FormaConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.analyzer_latency_ms, 250);
    assert_eq!(config.selection_seed(), SelectionSeed(42));
    assert_eq!(config.engine.backfill_threshold, 2);
    assert!(!config.engine.include_images);
    assert!(config.summary().contains("include_images=false"));
}

#[test]
#[serial]
fn test_blank_values_count_as_unset() {
    clear_env();
    env::set_var(SELECTION_SEED_VAR, "   ");
    env::set_var(INCLUDE_IMAGES_VAR, "");

    let config = FormaConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.selection_seed, None);
    assert!(config.engine.include_images);
}

#[test]
#[serial]
fn test_unparseable_values_are_rejected() {
    clear_env();
    env::set_var(ANALYZER_LATENCY_VAR, "soon");
    let error = FormaConfig::from_env().unwrap_err();
    assert!(matches!(&error, ConfigError::Parse(message) if message.contains(ANALYZER_LATENCY_VAR)));

    clear_env();
    env::set_var(INCLUDE_IMAGES_VAR, "maybe");
    let error = FormaConfig::from_env().unwrap_err();
    clear_env();
    assert!(matches!(error, ConfigError::Parse(_)));
}

#[test]
#[serial]
fn test_out_of_range_values_are_rejected() {
    clear_env();
    env::set_var(ANALYZER_LATENCY_VAR, "60001");
    let error = FormaConfig::from_env().unwrap_err();
    assert_eq!(
        error.to_string(),
        format!("Invalid range: {ANALYZER_LATENCY_VAR} must be at most {MAX_ANALYZER_LATENCY_MS}")
    );

    clear_env();
    env::set_var(BACKFILL_THRESHOLD_VAR, "0");
    let error = FormaConfig::from_env().unwrap_err();
    clear_env();
    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));
}

#[test]
fn test_config_errors_become_app_errors() {
    let error = AppError::from(ConfigError::MissingField("images"));
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("images"));
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    assert_eq!(LogFormat::Json.to_string(), "json");
}

#[test]
#[serial]
fn test_production_logging_includes_location() {
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");
    let config = LoggingConfig::from_env();
    env::remove_var("ENVIRONMENT");
    env::remove_var("LOG_FORMAT");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.environment, "production");
}
