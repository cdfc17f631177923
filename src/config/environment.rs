// ABOUTME: Environment-driven engine configuration with typed deployment environment
// ABOUTME: Loads analytics settings from FITAI_* variables and validates them before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::intelligence::AnalyticsConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }

    /// Lowercase name of the environment
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Validated analytics settings
    pub analytics: AnalyticsConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if any `FITAI_*` variable fails to
    /// parse or the resulting settings fail validation
    pub fn from_env() -> AppResult<Self> {
        let environment =
            Environment::from_str_or_default(&env::var("ENVIRONMENT").unwrap_or_default());
        let analytics = AnalyticsConfig::load()?;

        info!(
            environment = %environment,
            recent_pr_window_days = analytics.records.recent_pr_window_days,
            share_threshold_percent = analytics.balance.share_threshold_percent,
            "Analytics configuration loaded"
        );

        Ok(Self {
            environment,
            analytics,
        })
    }
}
