// ABOUTME: Analytics engine configuration with environment overrides and validation
// ABOUTME: Aggregates record, volume-balance, and readiness settings into one validated config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Configuration Module
//!
//! Defaults come from [`crate::constants`]; every field can be overridden
//! through a `FITAI_*` environment variable. A loaded configuration is always
//! validated before use.

mod balance;
mod error;
mod readiness;
mod records;

pub use balance::BalanceConfig;
pub use error::ConfigError;
pub use readiness::ReadinessConfig;
pub use records::RecordsConfig;

use crate::constants::readiness::MAX_SCORE;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;

/// Complete analytics engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Record grouping, timeline and feed settings
    pub records: RecordsConfig,
    /// Donut geometry and imbalance rules
    pub balance: BalanceConfig,
    /// Readiness band thresholds
    pub readiness: ReadinessConfig,
}

static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

impl AnalyticsConfig {
    /// Get the global configuration instance
    ///
    /// Loaded from the environment on first access; falls back to defaults
    /// (with a warning) when the environment holds invalid values.
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load analytics config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let records = &self.records;
        if records.recent_pr_window_days == 0 || records.recent_feed_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recency windows must be at least one day",
            ));
        }
        if records.history_limit == 0
            || records.grid_preview_count == 0
            || records.recent_feed_limit == 0
            || records.summary_recent_limit == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "record list limits must be positive",
            ));
        }
        if records.search_debounce_ms == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "search_debounce_ms must be positive",
            ));
        }

        let balance = &self.balance;
        if !(balance.chart_diameter.is_finite() && balance.chart_diameter > 0.0)
            || !(balance.stroke_width.is_finite() && balance.stroke_width > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "chart geometry must be positive and finite",
            ));
        }
        if balance.stroke_width >= balance.chart_diameter {
            return Err(ConfigError::InvalidRange(
                "stroke_width must be < chart_diameter",
            ));
        }
        if !(balance.dominance_ratio.is_finite() && balance.dominance_ratio > 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "dominance_ratio must be greater than 1",
            ));
        }
        if !(balance.share_threshold_percent > 0.0 && balance.share_threshold_percent <= MAX_SCORE)
        {
            return Err(ConfigError::ValueOutOfRange(
                "share_threshold_percent must be in (0, 100]",
            ));
        }

        let readiness = &self.readiness;
        for threshold in [readiness.ready_threshold, readiness.moderate_threshold] {
            if !(0.0..=MAX_SCORE).contains(&threshold) {
                return Err(ConfigError::ValueOutOfRange(
                    "readiness thresholds must be in [0, 100]",
                ));
            }
        }
        if readiness.moderate_threshold >= readiness.ready_threshold {
            return Err(ConfigError::InvalidRange(
                "moderate_threshold must be < ready_threshold",
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Record display overrides
        override_from_env(
            "FITAI_RECENT_PR_WINDOW_DAYS",
            &mut self.records.recent_pr_window_days,
        )?;
        override_from_env("FITAI_HISTORY_LIMIT", &mut self.records.history_limit)?;
        override_from_env(
            "FITAI_GRID_PREVIEW_COUNT",
            &mut self.records.grid_preview_count,
        )?;
        override_from_env("FITAI_RECENT_FEED_DAYS", &mut self.records.recent_feed_days)?;
        override_from_env(
            "FITAI_RECENT_FEED_LIMIT",
            &mut self.records.recent_feed_limit,
        )?;
        override_from_env(
            "FITAI_SUMMARY_RECENT_LIMIT",
            &mut self.records.summary_recent_limit,
        )?;
        override_from_env(
            "FITAI_SEARCH_DEBOUNCE_MS",
            &mut self.records.search_debounce_ms,
        )?;

        // Muscle balance overrides
        override_from_env("FITAI_CHART_DIAMETER", &mut self.balance.chart_diameter)?;
        override_from_env("FITAI_CHART_STROKE_WIDTH", &mut self.balance.stroke_width)?;
        override_from_env(
            "FITAI_IMBALANCE_DOMINANCE_RATIO",
            &mut self.balance.dominance_ratio,
        )?;
        override_from_env(
            "FITAI_IMBALANCE_SHARE_THRESHOLD",
            &mut self.balance.share_threshold_percent,
        )?;

        // Readiness overrides
        override_from_env(
            "FITAI_READINESS_READY_THRESHOLD",
            &mut self.readiness.ready_threshold,
        )?;
        override_from_env(
            "FITAI_READINESS_MODERATE_THRESHOLD",
            &mut self.readiness.moderate_threshold,
        )?;

        Ok(self)
    }
}

/// Parse `name` into `target` when set; unset leaves the default, non-Unicode is an error
fn override_from_env<T: FromStr>(name: &'static str, target: &mut T) -> Result<(), ConfigError> {
    let val = match env::var(name) {
        Ok(val) => val,
        Err(VarError::NotPresent) => return Ok(()),
        Err(e @ VarError::NotUnicode(_)) => {
            tracing::warn!("{name} is not valid Unicode");
            return Err(e.into());
        }
    };
    *target = val
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
    Ok(())
}
