// ABOUTME: Configuration module for fitai-intelligence crate
// ABOUTME: Re-exports analytics configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analytics engine configuration (records, volume balance, readiness)
pub mod analytics;

pub use analytics::AnalyticsConfig;
