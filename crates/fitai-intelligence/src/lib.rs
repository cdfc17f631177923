// ABOUTME: Training analytics aggregation engine for the Fit-AI platform
// ABOUTME: Record classification, recency windows, exercise grouping, muscle balance, and readiness display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fit-AI Intelligence
//!
//! Pure, synchronous transformations from raw personal-record rows and
//! per-muscle volume samples into display-ready structures. Nothing here
//! performs I/O or holds state between calls; every function can be invoked
//! concurrently and its result discarded and recomputed at will.
//!
//! ## Modules
//!
//! - **record_classifier**: labels, color tags, priorities and value formatting per record type
//! - **recency**: today/yesterday/within-N-days checks and relative date labels
//! - **record_grouping**: grouping by exercise, priority sorting, timelines, filters and summaries
//! - **muscle_balance**: percentage shares, donut segments and imbalance detection
//! - **readiness**: band, color and recommendation for an upstream readiness score
//! - **config**: environment-driven, validated engine settings

// Re-export foundation modules so engine code can use crate-relative paths
pub use fitai_core::{constants, errors, models};

/// Engine configuration with environment overrides
pub mod config;

/// Record type labels, colors, priorities and value formatting
pub mod record_classifier;

/// Recency classification relative to a reference instant
pub mod recency;

/// Exercise grouping, sorting, filtering and summaries
pub mod record_grouping;

/// Muscle volume distribution and imbalance detection
pub mod muscle_balance;

/// Readiness score presentation
pub mod readiness;

pub use config::analytics::{
    AnalyticsConfig, BalanceConfig, ConfigError, ReadinessConfig, RecordsConfig,
};
pub use muscle_balance::{
    BalanceAnalyzer, DonutGeometry, DonutSegment, FallbackColor, ImbalanceResult, ImbalanceRules,
    MuscleData, MusclePalette,
};
pub use readiness::{ReadinessBand, ReadinessView};
pub use recency::Recency;
pub use record_classifier::{RecordClassification, RecordClassifier};
pub use record_grouping::{
    ExerciseGroup, GroupPreview, HistoryEntry, RecordGrouper, RecordSummary,
};
