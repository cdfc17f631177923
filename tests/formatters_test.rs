// ABOUTME: Unit tests for output formatting of outbound shapes
// ABOUTME: Covers JSON output, format selection, and TOON availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::samples;
use fitai_analytics::formatters::{format_output, format_output_pretty, OutputFormat};
use fitai_analytics::models::ReportingPeriod;
use fitai_analytics::services::MuscleBalanceService;

#[test]
fn test_output_format_selection() {
    assert_eq!(OutputFormat::from_str_param("TOON"), OutputFormat::Toon);
    assert_eq!(OutputFormat::from_str_param("xml"), OutputFormat::Json);
    assert_eq!(OutputFormat::default(), OutputFormat::Json);
    assert_eq!(OutputFormat::Json.content_type(), "application/json");
    assert_eq!(OutputFormat::Toon.to_string(), "toon");
}

#[test]
fn test_json_output_of_balance_report() {
    let report = MuscleBalanceService::default().report(
        &samples(&[("chest", 600.0), ("back", 400.0)]),
        ReportingPeriod::Week,
    );
    let output = format_output(&report, OutputFormat::Json).unwrap();
    assert_eq!(output.format, OutputFormat::Json);
    assert_eq!(output.content_type, "application/json");

    let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();
    assert_eq!(value["period"], "week");
    assert_eq!(value["segments"][0]["muscleGroup"], "chest");
    assert_eq!(value["totalVolumeLabel"], "1.0k");
}

#[test]
fn test_pretty_json_spans_lines() {
    let output = format_output_pretty(&ReportingPeriod::Month, OutputFormat::Json).unwrap();
    assert_eq!(output.data, "\"month\"");

    let report = MuscleBalanceService::default().report(&[], ReportingPeriod::Month);
    let pretty = format_output_pretty(&report, OutputFormat::Json).unwrap();
    assert!(pretty.data.contains('\n'));
}

#[cfg(not(feature = "toon"))]
#[test]
fn test_toon_requires_feature() {
    use fitai_analytics::errors::{AppError, ErrorCode};

    let error = format_output(&ReportingPeriod::Week, OutputFormat::Toon).unwrap_err();
    assert_eq!(error.format, OutputFormat::Toon);

    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::SerializationError);
}

#[cfg(feature = "toon")]
#[test]
fn test_toon_output() {
    let report = MuscleBalanceService::default().report(
        &samples(&[("chest", 600.0), ("back", 400.0)]),
        ReportingPeriod::Week,
    );
    let output = format_output(&report, OutputFormat::Toon).unwrap();
    assert_eq!(output.content_type, "application/vnd.toon");
    assert!(output.data.contains("chest"));
}
