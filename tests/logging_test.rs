// ABOUTME: Tests for environment-driven logging configuration
// ABOUTME: Verifies LOG_FORMAT parsing, production defaults and service overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bioscan::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
];

fn clear_logging_env() {
    for key in LOGGING_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_env_value(Some("json")), LogFormat::Json);
    assert_eq!(LogFormat::from_env_value(Some(" JSON ")), LogFormat::Json);
    assert_eq!(LogFormat::from_env_value(Some("compact")), LogFormat::Compact);
    assert_eq!(LogFormat::from_env_value(Some("pretty")), LogFormat::Pretty);
    assert_eq!(LogFormat::from_env_value(Some("xml")), LogFormat::Pretty);
    assert_eq!(LogFormat::from_env_value(None), LogFormat::Pretty);
    assert_eq!(LogFormat::Json.to_string(), "json");
}

#[test]
fn test_default_config_is_quiet() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "bioscan-cli");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "bioscan-batch");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "bioscan-batch");
    assert_eq!(config.environment, "development");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_production_enables_location_and_thread() {
    clear_logging_env();
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.environment, "production");
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.format, LogFormat::Pretty);
}

#[test]
fn test_with_level_overrides_level_only() {
    let config = LoggingConfig::default().with_level("trace");
    assert_eq!(config.level, "trace");
    assert_eq!(config.format, LogFormat::Pretty);
}
