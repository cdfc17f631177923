// ABOUTME: Benchmark fixtures generating deterministic personal records and volume data
// ABOUTME: Produces reproducible record histories, muscle samples, and logged sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic data generation for reproducible performance measurements.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fitai_analytics::models::{
    ExerciseSummary, LoggedSet, MuscleVolumeSample, PersonalRecord, RecordType,
};

/// Number of distinct exercises records are spread over
const EXERCISE_COUNT: usize = 40;

const MUSCLE_GROUPS: [&str; 12] = [
    "Chest",
    "Back",
    "Shoulders",
    "Biceps",
    "Triceps",
    "Forearms",
    "Core",
    "Quads",
    "Hamstrings",
    "Glutes",
    "Calves",
    "Neck",
];

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RecordBatchSize {
    /// Small dataset (50 records), a new user
    Small,
    /// Medium dataset (500 records), a typical user
    Medium,
    /// Large dataset (5000 records), years of history
    Large,
}

impl RecordBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5000,
        }
    }
}

/// Fixed reference instant so recency windows are stable across runs
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

const fn record_type(index: usize) -> RecordType {
    match index % 7 {
        0 => RecordType::OneRepMax,
        1 => RecordType::MaxWeight,
        2 => RecordType::MaxReps,
        3 => RecordType::MaxVolume,
        4 => RecordType::BestTime,
        5 => RecordType::LongestDistance,
        _ => RecordType::LongestDuration,
    }
}

#[allow(clippy::cast_possible_wrap)]
fn generate_record(index: usize, now: DateTime<Utc>) -> PersonalRecord {
    let exercise_id = (index * 7 % EXERCISE_COUNT) as i64 + 1;
    // Every 25th record lost its exercise
    let exercise = (index % 25 != 0).then(|| ExerciseSummary {
        id: exercise_id,
        name: format!("Exercise {exercise_id:02}"),
        category: if exercise_id % 2 == 0 { "Strength" } else { "Cardio" }.to_owned(),
    });

    PersonalRecord {
        id: index as i64 + 1,
        exercise_id,
        record_type: record_type(index),
        value: 20.0 + ((index * 37) % 200) as f64,
        display_unit: None,
        achieved_at: now - Duration::hours(((index * 53) % 8760) as i64),
        notes: None,
        exercise,
    }
}

/// Generate a batch of personal records spread over the past year
#[must_use]
pub fn generate_records(size: RecordBatchSize) -> Vec<PersonalRecord> {
    let now = reference_now();
    (0..size.count())
        .map(|index| generate_record(index, now))
        .collect()
}

/// One volume sample per muscle group
#[must_use]
pub fn generate_muscle_samples() -> Vec<MuscleVolumeSample> {
    MUSCLE_GROUPS
        .iter()
        .enumerate()
        .map(|(index, name)| MuscleVolumeSample::new(*name, 500.0 + ((index * 911) % 4000) as f64))
        .collect()
}

/// Logged sets of a training month, warm-ups included
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_logged_sets(count: usize) -> Vec<LoggedSet> {
    (0..count)
        .map(|index| LoggedSet {
            weight: Some(20.0 + ((index * 13) % 120) as f64),
            reps: Some(3 + (index % 12) as u32),
            is_warmup: index % 6 == 0,
            is_completed: index % 17 != 0,
            muscle_groups: vec![
                MUSCLE_GROUPS[index % MUSCLE_GROUPS.len()].to_owned(),
                MUSCLE_GROUPS[(index + 5) % MUSCLE_GROUPS.len()].to_owned(),
            ],
        })
        .collect()
}
