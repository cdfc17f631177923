// ABOUTME: Shared test utilities for analytics engine integration tests
// ABOUTME: Provides a fixed reference instant and personal record / volume sample builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use fitai_analytics::intelligence::Recency;
use fitai_analytics::models::{ExerciseSummary, MuscleVolumeSample, PersonalRecord, RecordType};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Route engine logs to the test writer once per test binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference instant: Sunday 2025-06-15 12:00 UTC
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Recency pinned to the reference instant
pub fn recency() -> Recency<Utc> {
    Recency::at(reference_now())
}

/// Reference instant minus whole days
pub fn days_ago(days: i64) -> DateTime<Utc> {
    reference_now() - Duration::days(days)
}

pub fn exercise(id: i64, name: &str, category: &str) -> ExerciseSummary {
    ExerciseSummary {
        id,
        name: name.to_owned(),
        category: category.to_owned(),
    }
}

/// Record for a joined exercise, achieved `days` days before the reference instant
pub fn record(
    id: i64,
    exercise_id: i64,
    exercise_name: &str,
    record_type: RecordType,
    value: f64,
    days: i64,
) -> PersonalRecord {
    PersonalRecord {
        id,
        exercise_id,
        record_type,
        value,
        display_unit: None,
        achieved_at: days_ago(days),
        notes: None,
        exercise: Some(exercise(exercise_id, exercise_name, "Strength")),
    }
}

/// Record whose exercise was deleted
pub fn orphan_record(id: i64, exercise_id: i64, record_type: RecordType, days: i64) -> PersonalRecord {
    PersonalRecord {
        exercise: None,
        ..record(id, exercise_id, "", record_type, 100.0, days)
    }
}

/// Mixed record set over three exercises
pub fn sample_records() -> Vec<PersonalRecord> {
    vec![
        record(1, 10, "Squat", RecordType::MaxWeight, 140.0, 20),
        record(2, 20, "bench press", RecordType::OneRepMax, 105.0, 2),
        record(3, 10, "Squat", RecordType::OneRepMax, 150.0, 3),
        record(4, 30, "Deadlift", RecordType::MaxReps, 12.0, 45),
        record(5, 20, "bench press", RecordType::MaxWeight, 100.0, 9),
        record(6, 10, "Squat", RecordType::MaxReps, 8.0, 40),
        record(7, 20, "bench press", RecordType::MaxVolume, 3200.0, 1),
    ]
}

pub fn samples(pairs: &[(&str, f64)]) -> Vec<MuscleVolumeSample> {
    pairs
        .iter()
        .map(|&(name, volume)| MuscleVolumeSample::new(name, volume))
        .collect()
}
