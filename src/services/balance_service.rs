// ABOUTME: Muscle balance report service producing donut segments and imbalance warnings
// ABOUTME: Wraps the balance analyzer with period labels, volume totals, and structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::{BalanceAnalyzer, BalanceConfig, DonutSegment, ImbalanceResult};
use crate::models::{LoggedSet, MuscleVolumeSample, ReportingPeriod};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Muscle balance widget contents for one reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleBalanceReport {
    /// Reporting period
    pub period: ReportingPeriod,
    /// Period selector label
    pub period_label: String,
    /// Sum of all muscle volumes
    pub total_volume: f64,
    /// Compact total ("12.3k")
    pub total_volume_label: String,
    /// Donut segments in input order
    pub segments: Vec<DonutSegment>,
    /// Imbalance verdict
    pub imbalance: ImbalanceResult,
    /// False when there is no volume to chart
    pub has_data: bool,
}

/// Muscle balance report service
#[derive(Debug, Clone, Default)]
pub struct MuscleBalanceService {
    analyzer: BalanceAnalyzer,
}

impl MuscleBalanceService {
    /// Create a service with the given balance settings
    #[must_use]
    pub fn new(config: &BalanceConfig) -> Self {
        Self {
            analyzer: BalanceAnalyzer::from_config(config),
        }
    }

    /// Create a service around a preconfigured analyzer
    #[must_use]
    pub const fn with_analyzer(analyzer: BalanceAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Underlying analyzer
    #[must_use]
    pub const fn analyzer(&self) -> &BalanceAnalyzer {
        &self.analyzer
    }

    /// Build the report for per-muscle volume samples
    #[must_use]
    pub fn report(&self, samples: &[MuscleVolumeSample], period: ReportingPeriod) -> MuscleBalanceReport {
        let data = self.analyzer.to_percentages(samples);
        let total_volume = BalanceAnalyzer::total_volume(&data);
        let imbalance = self.analyzer.detect_imbalance(&data);
        let segments = self.analyzer.segment(&data);

        info!(
            period = %period,
            muscle_groups = segments.len(),
            total_volume,
            has_imbalance = imbalance.has_imbalance,
            "Built muscle balance report"
        );

        MuscleBalanceReport {
            period,
            period_label: period.label().to_owned(),
            total_volume,
            total_volume_label: BalanceAnalyzer::format_volume(total_volume),
            segments,
            imbalance,
            has_data: total_volume > 0.0,
        }
    }

    /// Aggregate logged sets into muscle volume, then build the report
    #[must_use]
    pub fn report_from_sets(&self, sets: &[LoggedSet], period: ReportingPeriod) -> MuscleBalanceReport {
        self.report(&BalanceAnalyzer::aggregate_sets(sets), period)
    }
}
