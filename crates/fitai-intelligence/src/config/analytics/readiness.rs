// ABOUTME: Readiness score band thresholds
// ABOUTME: Scores at or above each threshold fall into the corresponding band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::readiness::{MODERATE_THRESHOLD, READY_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Readiness band thresholds on the 0-100 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Lowest score of the "ready" band
    pub ready_threshold: f64,
    /// Lowest score of the "moderate" band
    pub moderate_threshold: f64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            ready_threshold: READY_THRESHOLD,
            moderate_threshold: MODERATE_THRESHOLD,
        }
    }
}
