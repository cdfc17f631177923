// ABOUTME: Per-muscle-group training volume samples and the logged sets they are derived from
// ABOUTME: Volume is an aggregate (kg moved) attributed to one muscle group over a reporting period
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate training volume for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleVolumeSample {
    /// Muscle group name as stored upstream
    pub muscle_group: String,
    /// Non-negative aggregate volume (kg moved)
    pub volume: f64,
}

impl MuscleVolumeSample {
    /// Create a sample
    pub fn new(muscle_group: impl Into<String>, volume: f64) -> Self {
        Self {
            muscle_group: muscle_group.into(),
            volume,
        }
    }
}

/// Reporting period of a volume distribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    /// Current week
    #[default]
    Week,
    /// Current month
    Month,
}

impl ReportingPeriod {
    /// Parse from string with fallback to the weekly period
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "month" | "monthly" => Self::Month,
            _ => Self::Week,
        }
    }

    /// Human-readable label for period selectors
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Week => "This Week",
            Self::Month => "This Month",
        }
    }

    /// Wire code of the period
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged set with the muscle groups its exercise targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedSet {
    /// Load in kg
    #[serde(default)]
    pub weight: Option<f64>,
    /// Completed repetitions
    #[serde(default)]
    pub reps: Option<u32>,
    /// Warm-up sets do not count toward volume
    #[serde(default)]
    pub is_warmup: bool,
    /// Only completed sets count toward volume
    #[serde(default)]
    pub is_completed: bool,
    /// Muscle groups targeted by the set's exercise
    #[serde(default)]
    pub muscle_groups: Vec<String>,
}
