// ABOUTME: Configuration module for the Fit-AI analytics engine
// ABOUTME: Re-exports the deployment environment and top-level engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven engine configuration
pub mod environment;

pub use environment::{EngineConfig, Environment};
pub use fitai_intelligence::config::analytics::{
    AnalyticsConfig, BalanceConfig, ConfigError, ReadinessConfig, RecordsConfig,
};
