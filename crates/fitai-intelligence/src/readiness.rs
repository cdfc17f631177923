// ABOUTME: Presentation of an upstream readiness score as a band, color tag, and recommendation
// ABOUTME: The score itself is computed elsewhere; this module only classifies and renders it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::analytics::ReadinessConfig;
use crate::constants::readiness::{
    LOW_RECOMMENDATION, MAX_SCORE, MODERATE_RECOMMENDATION, READY_RECOMMENDATION,
};
use crate::models::BadgeColor;
use serde::{Deserialize, Serialize};

/// Readiness band of a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessBand {
    /// At or above the ready threshold
    Ready,
    /// At or above the moderate threshold
    Moderate,
    /// Below the moderate threshold
    Low,
}

impl ReadinessBand {
    /// Band of a score under the given thresholds
    ///
    /// Scores are clamped to 0-100; NaN counts as 0.
    #[must_use]
    pub fn classify(score: f64, config: &ReadinessConfig) -> Self {
        let score = clamp_score(score);
        if score >= config.ready_threshold {
            Self::Ready
        } else if score >= config.moderate_threshold {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Band of a score under the default thresholds
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self::classify(score, &ReadinessConfig::default())
    }

    /// Color tag of the band
    #[must_use]
    pub const fn color(&self) -> BadgeColor {
        match self {
            Self::Ready => BadgeColor::Green,
            Self::Moderate => BadgeColor::Yellow,
            Self::Low => BadgeColor::Red,
        }
    }

    /// Recommendation shown when upstream supplies none
    #[must_use]
    pub const fn default_recommendation(&self) -> &'static str {
        match self {
            Self::Ready => READY_RECOMMENDATION,
            Self::Moderate => MODERATE_RECOMMENDATION,
            Self::Low => LOW_RECOMMENDATION,
        }
    }
}

/// Display-ready readiness indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessView {
    /// Clamped score
    pub score: f64,
    /// Band of the score
    pub band: ReadinessBand,
    /// Color tag of the band
    pub color: BadgeColor,
    /// Upstream recommendation, or the band's default
    pub recommendation: String,
}

impl ReadinessView {
    /// Build the view, preferring an upstream recommendation when present
    #[must_use]
    pub fn new(score: f64, recommendation: Option<&str>, config: &ReadinessConfig) -> Self {
        let band = ReadinessBand::classify(score, config);
        Self {
            score: clamp_score(score),
            band,
            color: band.color(),
            recommendation: recommendation
                .map_or_else(|| band.default_recommendation().to_owned(), str::to_owned),
        }
    }

    /// Unfilled remainder of a progress ring of the given circumference
    #[must_use]
    pub fn ring_dash_offset(&self, circumference: f64) -> f64 {
        circumference - (self.score / MAX_SCORE) * circumference
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, MAX_SCORE)
    }
}
