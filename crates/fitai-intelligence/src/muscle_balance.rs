// ABOUTME: Muscle balance analyzer turning per-muscle volume into donut segments and imbalance verdicts
// ABOUTME: Computes percentage shares, cumulative arc offsets, palette colors, and dominance heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Muscle balance analysis
//!
//! Volume samples flow through three pure steps:
//!
//! 1. [`BalanceAnalyzer::to_percentages`] normalizes volumes into shares of the total
//! 2. [`BalanceAnalyzer::segment`] lays the shares out as arcs around a donut ring
//! 3. [`BalanceAnalyzer::detect_imbalance`] flags lopsided distributions
//!
//! Negative and non-finite volumes are treated as zero throughout, and an
//! all-zero distribution yields 0% for every group.

use crate::config::analytics::BalanceConfig;
use crate::constants::balance::{
    FALLBACK_ROTATION, MIN_GROUPS_FOR_IMBALANCE, MIN_SHARE_FLOOR_PERCENT, NEUTRAL_COLOR, PALETTE,
    THOUSANDS_DISPLAY_THRESHOLD,
};
use crate::constants::units::PERCENTAGE_MULTIPLIER;
use crate::models::{LoggedSet, MuscleVolumeSample};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::f64::consts::PI;
use tracing::debug;

/// A muscle group's share of total volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleData {
    /// Muscle group name as received
    pub muscle_group: String,
    /// Sanitized volume
    pub volume: f64,
    /// Share of total volume in percent (0 when the total is 0)
    pub percentage: f64,
    /// Display color
    pub color: String,
}

/// Arc of the donut chart for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutSegment {
    /// Underlying share
    #[serde(flatten)]
    pub data: MuscleData,
    /// Start position along the circumference (sum of all preceding arcs)
    pub offset: f64,
    /// Length of this arc along the circumference
    pub arc_length: f64,
    /// Position in input order
    pub index: usize,
}

/// Imbalance verdict over a volume distribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImbalanceResult {
    /// Whether either heuristic fired
    pub has_imbalance: bool,
    /// Human-readable explanation when an imbalance was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ImbalanceResult {
    /// Verdict with no imbalance
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            has_imbalance: false,
            message: None,
        }
    }

    fn imbalanced(message: String) -> Self {
        Self {
            has_imbalance: true,
            message: Some(message),
        }
    }
}

/// Color policy for muscle groups missing from the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackColor {
    /// Always use this color
    Fixed(String),
    /// Pick from the rotation by a stable hash of the lowercase name
    Rotating(Vec<String>),
}

/// Mapping from muscle group name to display color
///
/// Lookups ignore case and surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusclePalette {
    colors: HashMap<String, String>,
    fallback: FallbackColor,
}

impl Default for MusclePalette {
    fn default() -> Self {
        Self::standard()
    }
}

impl MusclePalette {
    /// Build a palette from explicit entries and a fallback policy
    #[must_use]
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>, fallback: FallbackColor) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let colors = entries
            .into_iter()
            .map(|(name, color)| (palette_key(name.as_ref()), color.into()))
            .collect();
        Self { colors, fallback }
    }

    /// Built-in palette with a rotating fallback
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            PALETTE.iter().copied(),
            FallbackColor::Rotating(FALLBACK_ROTATION.iter().map(|&c| c.to_owned()).collect()),
        )
    }

    /// Color for a muscle group; deterministic for unmapped names
    #[must_use]
    pub fn color_for(&self, muscle_group: &str) -> String {
        let key = palette_key(muscle_group);
        if let Some(color) = self.colors.get(&key) {
            return color.clone();
        }
        match &self.fallback {
            FallbackColor::Fixed(color) => color.clone(),
            FallbackColor::Rotating(rotation) if rotation.is_empty() => NEUTRAL_COLOR.to_owned(),
            FallbackColor::Rotating(rotation) => {
                let slot = fnv1a(key.as_bytes()) % rotation.len() as u64;
                rotation[slot as usize].clone()
            }
        }
    }
}

/// Ring geometry of the donut chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutGeometry {
    /// Outer diameter
    pub diameter: f64,
    /// Ring thickness
    pub stroke_width: f64,
}

impl Default for DonutGeometry {
    fn default() -> Self {
        Self::from_config(&BalanceConfig::default())
    }
}

impl DonutGeometry {
    /// Geometry from balance settings
    #[must_use]
    pub const fn from_config(config: &BalanceConfig) -> Self {
        Self {
            diameter: config.chart_diameter,
            stroke_width: config.stroke_width,
        }
    }

    /// Radius of the ring's center line
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.diameter - self.stroke_width) / 2.0
    }

    /// Length of the ring's center line
    #[must_use]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    /// Center coordinate on both axes
    #[must_use]
    pub fn center(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Thresholds of the two imbalance heuristics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImbalanceRules {
    /// Max/min share ratio above which the top group is "significantly overtrained"
    pub dominance_ratio: f64,
    /// Share (percent) above which the top group dominates
    pub share_threshold_percent: f64,
}

impl Default for ImbalanceRules {
    fn default() -> Self {
        Self::from_config(&BalanceConfig::default())
    }
}

impl ImbalanceRules {
    /// Rules from balance settings
    #[must_use]
    pub const fn from_config(config: &BalanceConfig) -> Self {
        Self {
            dominance_ratio: config.dominance_ratio,
            share_threshold_percent: config.share_threshold_percent,
        }
    }

    /// Replace the share threshold, keeping the dominance ratio
    #[must_use]
    pub const fn with_threshold(mut self, share_threshold_percent: f64) -> Self {
        self.share_threshold_percent = share_threshold_percent;
        self
    }

    /// Evaluate a distribution
    ///
    /// Fewer than two groups is always balanced. Otherwise the ratio rule is
    /// checked first (minimum share floored at 1%), then the share threshold;
    /// the first rule to fire decides the message. When several groups share
    /// the maximum or minimum, the earliest in input order is named.
    #[must_use]
    pub fn evaluate(&self, data: &[MuscleData]) -> ImbalanceResult {
        if data.len() < MIN_GROUPS_FOR_IMBALANCE {
            return ImbalanceResult::balanced();
        }

        let (mut dominant, mut neglected) = (&data[0], &data[0]);
        for item in &data[1..] {
            if sanitize(item.percentage) > sanitize(dominant.percentage) {
                dominant = item;
            }
            if sanitize(item.percentage) < sanitize(neglected.percentage) {
                neglected = item;
            }
        }

        let max_pct = sanitize(dominant.percentage);
        let min_pct = sanitize(neglected.percentage);
        let ratio = max_pct / min_pct.max(MIN_SHARE_FLOOR_PERCENT);

        if ratio > self.dominance_ratio {
            return ImbalanceResult::imbalanced(format!(
                "{} is significantly overtrained compared to {}. Consider balancing your routine.",
                dominant.muscle_group, neglected.muscle_group
            ));
        }

        if max_pct > self.share_threshold_percent {
            return ImbalanceResult::imbalanced(format!(
                "{} accounts for {:.0}% of your training. Consider diversifying.",
                dominant.muscle_group,
                max_pct.round()
            ));
        }

        ImbalanceResult::balanced()
    }
}

/// Volume distribution analyzer with injected palette, geometry and rules
#[derive(Debug, Clone, Default)]
pub struct BalanceAnalyzer {
    palette: MusclePalette,
    geometry: DonutGeometry,
    rules: ImbalanceRules,
}

impl BalanceAnalyzer {
    /// Analyzer with the standard palette and the given settings
    #[must_use]
    pub fn from_config(config: &BalanceConfig) -> Self {
        Self {
            palette: MusclePalette::standard(),
            geometry: DonutGeometry::from_config(config),
            rules: ImbalanceRules::from_config(config),
        }
    }

    /// Replace the color palette
    #[must_use]
    pub fn with_palette(mut self, palette: MusclePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the imbalance rules
    #[must_use]
    pub const fn with_rules(mut self, rules: ImbalanceRules) -> Self {
        self.rules = rules;
        self
    }

    /// Chart geometry in use
    #[must_use]
    pub const fn geometry(&self) -> &DonutGeometry {
        &self.geometry
    }

    /// Imbalance rules in use
    #[must_use]
    pub const fn rules(&self) -> &ImbalanceRules {
        &self.rules
    }

    /// Normalize volumes into percentage shares, preserving input order
    #[must_use]
    pub fn to_percentages(&self, samples: &[MuscleVolumeSample]) -> Vec<MuscleData> {
        let volumes: Vec<f64> = samples
            .iter()
            .map(|sample| {
                if !(sample.volume.is_finite() && sample.volume >= 0.0) {
                    debug!(
                        muscle_group = %sample.muscle_group,
                        volume = sample.volume,
                        "Treating invalid muscle volume as zero"
                    );
                }
                sanitize(sample.volume)
            })
            .collect();
        let total = share_denominator(&volumes);

        samples
            .iter()
            .zip(volumes)
            .map(|(sample, volume)| MuscleData {
                muscle_group: sample.muscle_group.clone(),
                volume,
                percentage: total.map_or(0.0, |(scale, total)| {
                    volume / scale / total * PERCENTAGE_MULTIPLIER
                }),
                color: self.palette.color_for(&sample.muscle_group),
            })
            .collect()
    }

    /// Lay shares out as consecutive arcs, each starting where the previous ended
    #[must_use]
    pub fn segment(&self, data: &[MuscleData]) -> Vec<DonutSegment> {
        let circumference = self.geometry.circumference();
        let mut offset = 0.0;
        data.iter()
            .enumerate()
            .map(|(index, item)| {
                let arc_length = sanitize(item.percentage) / PERCENTAGE_MULTIPLIER * circumference;
                let segment = DonutSegment {
                    data: item.clone(),
                    offset,
                    arc_length,
                    index,
                };
                offset += arc_length;
                segment
            })
            .collect()
    }

    /// Imbalance verdict using the configured rules
    #[must_use]
    pub fn detect_imbalance(&self, data: &[MuscleData]) -> ImbalanceResult {
        self.rules.evaluate(data)
    }

    /// Sum of volumes in a distribution
    #[must_use]
    pub fn total_volume(data: &[MuscleData]) -> f64 {
        data.iter().map(|item| sanitize(item.volume)).sum()
    }

    /// Compact volume label: `"1.5k"` from 1000 up, whole number below
    #[must_use]
    pub fn format_volume(volume: f64) -> String {
        let volume = sanitize(volume);
        if volume >= THOUSANDS_DISPLAY_THRESHOLD {
            format!("{:.1}k", volume / THOUSANDS_DISPLAY_THRESHOLD)
        } else {
            format!("{}", volume.round() as u64)
        }
    }

    /// Aggregate logged sets into per-muscle volume, largest first
    ///
    /// Warm-up and incomplete sets, and sets missing a positive weight or rep
    /// count, are ignored. A set's `weight x reps` is split evenly across its
    /// muscle groups. Equal volumes are ordered by muscle group name.
    #[must_use]
    pub fn aggregate_sets(sets: &[LoggedSet]) -> Vec<MuscleVolumeSample> {
        let mut by_muscle: BTreeMap<&str, f64> = BTreeMap::new();
        let mut counted = 0_usize;

        for set in sets {
            if set.is_warmup || !set.is_completed || set.muscle_groups.is_empty() {
                continue;
            }
            let (Some(weight), Some(reps)) = (set.weight, set.reps) else {
                continue;
            };
            if !(weight.is_finite() && weight > 0.0) || reps == 0 {
                continue;
            }

            let share = weight * f64::from(reps) / set.muscle_groups.len() as f64;
            for muscle in &set.muscle_groups {
                *by_muscle.entry(muscle.as_str()).or_insert(0.0) += share;
            }
            counted += 1;
        }

        debug!(
            total_sets = sets.len(),
            counted, "Aggregated working sets into muscle volume"
        );

        let mut samples: Vec<MuscleVolumeSample> = by_muscle
            .into_iter()
            .map(|(muscle, volume)| MuscleVolumeSample::new(muscle, volume))
            .collect();
        samples.sort_by(|a, b| b.volume.total_cmp(&a.volume));
        samples
    }
}

/// Scale and scaled total for percentage shares, `None` when there is no volume
///
/// Volumes are divided by the largest one only when their plain sum overflows.
fn share_denominator(volumes: &[f64]) -> Option<(f64, f64)> {
    let total: f64 = volumes.iter().sum();
    if total.is_finite() {
        return (total > 0.0).then_some((1.0, total));
    }
    let largest = volumes.iter().copied().fold(0.0_f64, f64::max);
    let scaled: f64 = volumes.iter().map(|volume| volume / largest).sum();
    Some((largest, scaled))
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn palette_key(name: &str) -> String {
    name.trim().to_lowercase()
}

// 64-bit FNV-1a; stable across runs and platforms
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;
    bytes.iter().fold(OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_known_vectors() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_palette_key_normalizes() {
        assert_eq!(palette_key("  Chest "), "chest");
    }

    #[test]
    fn test_default_geometry_radius() {
        let geometry = DonutGeometry::default();
        assert!((geometry.radius() - 78.0).abs() < f64::EPSILON);
        assert!((geometry.center() - 90.0).abs() < f64::EPSILON);
    }
}
