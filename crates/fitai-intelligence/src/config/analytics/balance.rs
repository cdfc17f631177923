// ABOUTME: Muscle balance configuration for donut geometry and imbalance detection
// ABOUTME: Configures chart diameter, stroke width, dominance ratio, and share threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::balance::{
    CHART_DIAMETER, DOMINANCE_RATIO, SHARE_THRESHOLD_PERCENT, STROKE_WIDTH,
};
use serde::{Deserialize, Serialize};

/// Muscle balance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Outer diameter of the donut chart
    pub chart_diameter: f64,
    /// Ring thickness
    pub stroke_width: f64,
    /// Max/min share ratio above which training is flagged as lopsided
    pub dominance_ratio: f64,
    /// Share (percent) above which a single group is flagged as dominant
    pub share_threshold_percent: f64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            chart_diameter: CHART_DIAMETER,
            stroke_width: STROKE_WIDTH,
            dominance_ratio: DOMINANCE_RATIO,
            share_threshold_percent: SHARE_THRESHOLD_PERCENT,
        }
    }
}
