// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment parsing, production defaults, and subscriber installation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitai_analytics::config::Environment;
use fitai_analytics::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: &[&str] = &[
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "SERVICE_VERSION",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
];

fn clear_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
fn test_default_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "fitai-analytics");
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_from_env_development() {
    clear_env();
    env::set_var("LOG_FORMAT", "compact");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_INCLUDE_THREAD", "1");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, "debug");
    assert!(config.include_thread);
    assert!(!config.include_location);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_from_env_production_enables_detail() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "fitai-analytics-worker");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "fitai-analytics-worker");
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(config.include_spans);
}

#[test]
fn test_summary_shape() {
    let summary = LoggingConfig::default().summary();
    assert_eq!(summary["service"]["name"], "fitai-analytics");
    assert_eq!(summary["service"]["environment"], "development");
    assert_eq!(summary["logging"]["format"], "Pretty");
    assert_eq!(summary["logging"]["features"]["spans"], false);
}

#[test]
#[serial]
fn test_init_installs_subscriber_once() {
    clear_env();
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };
    assert!(config.init().is_ok());
    assert!(config.init().is_err());
}
