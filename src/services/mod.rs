// ABOUTME: Service layer composing the analytics engine into display-ready views
// ABOUTME: Records overview and timelines, muscle balance reports, and debounced search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Muscle balance reports
pub mod balance_service;
/// Personal records overview, timelines and cards
pub mod records_service;
/// Debounced search query handling
pub mod search;

pub use balance_service::{MuscleBalanceReport, MuscleBalanceService};
pub use records_service::{
    ExerciseCard, RecordCard, RecordsOverview, RecordsService, TimelineEntry,
};
pub use search::SearchDebouncer;
