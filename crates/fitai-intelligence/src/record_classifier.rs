// ABOUTME: Record classifier and value formatter for personal records
// ABOUTME: Maps record types to labels, color tags, sort priority, and type-specific value strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record classification and formatting
//!
//! Every function here is total over [`RecordType`], including codes outside
//! the known taxonomy: those fall back to their raw code as label, a neutral
//! color tag, weight-style formatting, and the lowest sort priority.

use crate::constants::records::{
    ALL_TYPES_LABEL, DEFAULT_WEIGHT_UNIT, EPLEY_REP_DIVISOR, UNKNOWN_TYPE_PRIORITY,
};
use crate::constants::units::{METERS_PER_KILOMETER, SECONDS_PER_MINUTE};
use crate::models::{BadgeColor, RecordType, RecordTypeFilter};
use serde::{Deserialize, Serialize};

/// Label, color and priority resolved for a raw record-type code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordClassification {
    /// Parsed record type
    pub record_type: RecordType,
    /// Display label
    pub label: String,
    /// Badge color tag
    pub color: BadgeColor,
    /// Sort priority (lower first)
    pub priority: u8,
}

/// Stateless classifier for personal record types
pub struct RecordClassifier;

impl RecordClassifier {
    /// Display label of a record type
    #[must_use]
    pub fn label(record_type: &RecordType) -> &str {
        match record_type {
            RecordType::OneRepMax => "Est. 1RM",
            RecordType::MaxWeight => "Max Weight",
            RecordType::MaxReps => "Max Reps",
            RecordType::MaxVolume => "Max Volume",
            RecordType::BestTime => "Best Time",
            RecordType::LongestDuration => "Duration",
            RecordType::LongestDistance => "Distance",
            RecordType::Unrecognized(code) => code,
        }
    }

    /// Display label of a record-type filter, including the synthetic "all" value
    #[must_use]
    pub fn filter_label(filter: &RecordTypeFilter) -> &str {
        match filter {
            RecordTypeFilter::All => ALL_TYPES_LABEL,
            RecordTypeFilter::Only(record_type) => Self::label(record_type),
        }
    }

    /// Badge color of a record type
    #[must_use]
    pub const fn color(record_type: &RecordType) -> BadgeColor {
        match record_type {
            RecordType::OneRepMax => BadgeColor::Violet,
            RecordType::MaxWeight => BadgeColor::Blue,
            RecordType::MaxReps => BadgeColor::Green,
            RecordType::MaxVolume => BadgeColor::Orange,
            RecordType::BestTime => BadgeColor::Red,
            RecordType::LongestDuration => BadgeColor::Cyan,
            RecordType::LongestDistance => BadgeColor::Pink,
            RecordType::Unrecognized(_) => BadgeColor::Gray,
        }
    }

    /// Display priority within an exercise group (1 = first, unknown types last)
    #[must_use]
    pub const fn priority(record_type: &RecordType) -> u8 {
        match record_type {
            RecordType::OneRepMax => 1,
            RecordType::MaxWeight => 2,
            RecordType::MaxReps => 3,
            RecordType::MaxVolume => 4,
            RecordType::BestTime => 5,
            RecordType::LongestDuration => 6,
            RecordType::LongestDistance => 7,
            RecordType::Unrecognized(_) => UNKNOWN_TYPE_PRIORITY,
        }
    }

    /// Resolve a raw code into its full classification
    #[must_use]
    pub fn classify(code: &str) -> RecordClassification {
        let record_type = RecordType::from_code(code);
        RecordClassification {
            label: Self::label(&record_type).to_owned(),
            color: Self::color(&record_type),
            priority: Self::priority(&record_type),
            record_type,
        }
    }

    /// Format a record value with type-specific semantics
    ///
    /// - reps: whole number followed by `reps`
    /// - times and durations: seconds rendered as `"{m}m {s}s"` or `"{s}s"`
    /// - distances: meters, switching to kilometers with two decimals at 1000 m
    /// - everything else: one decimal followed by the unit (default `kg`)
    ///
    /// Negative and non-finite values format as zero.
    #[must_use]
    pub fn format_value(value: f64, record_type: &RecordType, display_unit: Option<&str>) -> String {
        let value = sanitize(value);
        match record_type {
            RecordType::MaxReps => format!("{} reps", value.round() as u64),
            RecordType::BestTime | RecordType::LongestDuration => format_duration(value),
            RecordType::LongestDistance => format_distance(value),
            RecordType::OneRepMax
            | RecordType::MaxWeight
            | RecordType::MaxVolume
            | RecordType::Unrecognized(_) => {
                let unit = display_unit.unwrap_or(DEFAULT_WEIGHT_UNIT);
                format!("{value:.1} {unit}")
            }
        }
    }

    /// Whether a candidate value improves on the existing best
    ///
    /// With no existing record any value counts. Times improve downward,
    /// every other type improves upward; equal values never count.
    #[must_use]
    pub fn beats_existing(candidate: f64, existing: Option<f64>, record_type: &RecordType) -> bool {
        existing.map_or(true, |best| {
            if record_type.lower_is_better() {
                candidate < best
            } else {
                candidate > best
            }
        })
    }

    /// Estimated one-rep max using the Epley formula: `weight x (1 + reps/30)`
    #[must_use]
    pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
        if reps <= 1 {
            return weight;
        }
        weight * (1.0 + f64::from(reps) / EPLEY_REP_DIVISOR)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn format_duration(total_seconds: f64) -> String {
    let mut minutes = (total_seconds / SECONDS_PER_MINUTE).floor() as u64;
    let mut seconds = (total_seconds % SECONDS_PER_MINUTE).round() as u64;
    // 59.5s rounds up to a full minute
    if seconds >= 60 {
        minutes += 1;
        seconds -= 60;
    }
    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn format_distance(meters: f64) -> String {
    // Decide on the rounded meter count so 999.6 never prints "1000 m"
    let rounded = meters.round();
    if rounded >= METERS_PER_KILOMETER {
        format!("{:.2} km", meters / METERS_PER_KILOMETER)
    } else {
        format!("{} m", rounded as u64)
    }
}
