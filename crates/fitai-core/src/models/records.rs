// ABOUTME: Personal record rows and the record-type taxonomy
// ABOUTME: Record types form a tagged enum with an explicit variant for codes this build does not know
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::records::{ALL_TYPES_CODE, UNKNOWN_EXERCISE_CATEGORY, UNKNOWN_EXERCISE_NAME};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Metric being maximized (or minimized, for times) by a personal record
///
/// Serialized as its snake_case code. Codes outside the known taxonomy are
/// preserved in [`RecordType::Unrecognized`] so that rows written by a newer
/// producer still flow through grouping and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    /// Estimated one-rep max from any set
    OneRepMax,
    /// Maximum weight lifted at any reps
    MaxWeight,
    /// Maximum reps at any weight
    MaxReps,
    /// Maximum weight x reps in a single workout
    MaxVolume,
    /// Best time for a cardio distance (lower is better)
    BestTime,
    /// Longest duration for cardio or flexibility work
    LongestDuration,
    /// Longest distance for cardio
    LongestDistance,
    /// Code not part of the known taxonomy
    Unrecognized(String),
}

impl RecordType {
    /// Every known record type, in display priority order
    pub const KNOWN: [Self; 7] = [
        Self::OneRepMax,
        Self::MaxWeight,
        Self::MaxReps,
        Self::MaxVolume,
        Self::BestTime,
        Self::LongestDuration,
        Self::LongestDistance,
    ];

    /// Parse a record-type code, keeping unknown codes verbatim
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "one_rep_max" => Self::OneRepMax,
            "max_weight" => Self::MaxWeight,
            "max_reps" => Self::MaxReps,
            "max_volume" => Self::MaxVolume,
            "best_time" => Self::BestTime,
            "longest_duration" => Self::LongestDuration,
            "longest_distance" => Self::LongestDistance,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    /// Wire code of this record type
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::OneRepMax => "one_rep_max",
            Self::MaxWeight => "max_weight",
            Self::MaxReps => "max_reps",
            Self::MaxVolume => "max_volume",
            Self::BestTime => "best_time",
            Self::LongestDuration => "longest_duration",
            Self::LongestDistance => "longest_distance",
            Self::Unrecognized(code) => code,
        }
    }

    /// Whether this code belongs to the known taxonomy
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Whether a smaller value is an improvement
    #[must_use]
    pub const fn lower_is_better(&self) -> bool {
        matches!(self, Self::BestTime)
    }
}

impl From<String> for RecordType {
    fn from(code: String) -> Self {
        match Self::from_code(&code) {
            Self::Unrecognized(_) => Self::Unrecognized(code),
            known => known,
        }
    }
}

impl From<&str> for RecordType {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl From<RecordType> for String {
    fn from(record_type: RecordType) -> Self {
        match record_type {
            RecordType::Unrecognized(code) => code,
            known => known.code().to_owned(),
        }
    }
}

impl FromStr for RecordType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Record-type filter: either every record, or one specific type
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordTypeFilter {
    /// Synthetic value matching every record; never attached to a record
    #[default]
    All,
    /// Match a single record type
    Only(RecordType),
}

impl RecordTypeFilter {
    /// Parse a filter code; `"all"` selects every type
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code == ALL_TYPES_CODE {
            Self::All
        } else {
            Self::Only(RecordType::from_code(code))
        }
    }

    /// Wire code of this filter
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::All => ALL_TYPES_CODE,
            Self::Only(record_type) => record_type.code(),
        }
    }

    /// Whether a record passes this filter
    #[must_use]
    pub fn matches(&self, record: &PersonalRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(record_type) => record.record_type == *record_type,
        }
    }

    /// Whether this filter narrows the record set
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Only(_))
    }
}

impl From<String> for RecordTypeFilter {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<RecordTypeFilter> for String {
    fn from(filter: RecordTypeFilter) -> Self {
        match filter {
            RecordTypeFilter::All => ALL_TYPES_CODE.to_owned(),
            RecordTypeFilter::Only(record_type) => record_type.into(),
        }
    }
}

impl From<RecordType> for RecordTypeFilter {
    fn from(record_type: RecordType) -> Self {
        Self::Only(record_type)
    }
}

/// Exercise fields joined onto a record row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    /// Exercise identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Category (chest, back, cardio, ...)
    pub category: String,
}

/// A personal best for one exercise and record type
///
/// Created upstream when a workout set beats a prior best and never mutated by
/// this engine. `exercise` is absent when the referenced exercise was deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Record identifier
    pub id: i64,
    /// Exercise the record belongs to
    pub exercise_id: i64,
    /// Metric of the record
    pub record_type: RecordType,
    /// Value: kg for weight and volume, reps, seconds, or meters
    pub value: f64,
    /// Unit for display (kg, lb, ...)
    #[serde(default)]
    pub display_unit: Option<String>,
    /// When the record was achieved
    pub achieved_at: DateTime<Utc>,
    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Joined exercise, absent if the exercise was deleted
    #[serde(default)]
    pub exercise: Option<ExerciseSummary>,
}

impl PersonalRecord {
    /// Exercise name, or the placeholder when the exercise is gone
    #[must_use]
    pub fn exercise_name(&self) -> &str {
        self.exercise
            .as_ref()
            .map_or(UNKNOWN_EXERCISE_NAME, |exercise| exercise.name.as_str())
    }

    /// Exercise category, or the placeholder when the exercise is gone
    #[must_use]
    pub fn exercise_category(&self) -> &str {
        self.exercise
            .as_ref()
            .map_or(UNKNOWN_EXERCISE_CATEGORY, |exercise| {
                exercise.category.as_str()
            })
    }
}
