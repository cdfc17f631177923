// ABOUTME: Core data models for personal records, muscle volume samples, and display tags
// ABOUTME: Plain serializable shapes exchanged with the storage and rendering collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Inbound rows arrive from the persistence collaborator already resident in
//! memory. Every model here is plain data: no behavior crosses a process
//! boundary, so each type derives `Serialize`/`Deserialize` with the
//! collaborator's camelCase field names.

mod display;
mod records;
mod volume;

pub use display::BadgeColor;
pub use records::{ExerciseSummary, PersonalRecord, RecordType, RecordTypeFilter};
pub use volume::{LoggedSet, MuscleVolumeSample, ReportingPeriod};
