// ABOUTME: Records view service composing classification, recency, and grouping into display-ready shapes
// ABOUTME: Builds the records overview, single-type timelines, and individual record cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Personal records view service
//!
//! The service owns no data. Callers hand it the rows fetched by the storage
//! collaborator together with a [`Recency`] reference instant, and get back
//! serializable structures ready for rendering.

use crate::intelligence::{
    ExerciseGroup, Recency, RecordClassifier, RecordGrouper, RecordSummary, RecordsConfig,
};
use crate::models::{BadgeColor, PersonalRecord, RecordTypeFilter};
use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One record rendered for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCard {
    /// Record id
    pub record_id: i64,
    /// Exercise id
    pub exercise_id: i64,
    /// Exercise name, or the placeholder when the exercise is gone
    pub exercise_name: String,
    /// Exercise category, or the placeholder when the exercise is gone
    pub exercise_category: String,
    /// Record type wire code
    pub record_type: String,
    /// Record type label
    pub type_label: String,
    /// Record type color tag
    pub color: BadgeColor,
    /// Formatted value
    pub value_label: String,
    /// Calendar date with year
    pub date_label: String,
    /// Relative date ("Today", "3 days ago", ...)
    pub relative_label: String,
    /// Achieved inside the recent-PR window
    pub is_recent: bool,
    /// Free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Exercise card for the all-time-bests grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCard {
    /// Exercise id
    pub exercise_id: i64,
    /// Exercise name
    pub exercise_name: String,
    /// Exercise category
    pub exercise_category: String,
    /// Any record inside the recent-PR window
    #[serde(rename = "hasRecentPR")]
    pub has_recent_pr: bool,
    /// Highest-priority records
    pub records: Vec<RecordCard>,
    /// Records left out of the preview
    pub hidden_count: usize,
}

/// One entry of a record-type timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Record id
    pub record_id: i64,
    /// Formatted value
    pub value_label: String,
    /// Calendar date with year
    pub date_label: String,
    /// Relative date
    pub relative_label: String,
    /// Newest entry of the timeline
    pub is_latest: bool,
}

/// Everything the records page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsOverview {
    /// Exercise cards after type and search filters
    pub groups: Vec<ExerciseCard>,
    /// Flat record list after type and search filters, newest first
    pub records: Vec<RecordCard>,
    /// Recent-records feed (unfiltered)
    pub recent: Vec<RecordCard>,
    /// Totals over all records (unfiltered)
    pub summary: RecordSummary,
    /// Whether a search query or type filter is narrowing the lists
    pub has_active_filters: bool,
}

/// Records view service
#[derive(Debug, Clone, Default)]
pub struct RecordsService {
    grouper: RecordGrouper,
}

impl RecordsService {
    /// Create a service with the given record settings
    #[must_use]
    pub const fn new(config: RecordsConfig) -> Self {
        Self {
            grouper: RecordGrouper::new(config),
        }
    }

    /// Underlying grouper
    #[must_use]
    pub const fn grouper(&self) -> &RecordGrouper {
        &self.grouper
    }

    /// Build the records overview
    ///
    /// The type filter and search query narrow the exercise cards and the
    /// flat list; the recent feed and summary always cover every record.
    pub fn overview<Tz: TimeZone>(
        &self,
        records: &[PersonalRecord],
        query: &str,
        filter: &RecordTypeFilter,
        recency: &Recency<Tz>,
    ) -> RecordsOverview {
        let by_type = RecordGrouper::filter_by_type(records, filter);

        let groups = RecordGrouper::filter_by_exercise(&self.grouper.group(&by_type, recency), query);
        let cards: Vec<ExerciseCard> = groups
            .iter()
            .map(|group| self.exercise_card(group, recency))
            .collect();

        let mut flat = RecordGrouper::filter_records_by_exercise(&by_type, query);
        flat.sort_by(|a, b| b.achieved_at.cmp(&a.achieved_at));

        let recent = self.grouper.recent_feed(records, recency);
        let summary = self.grouper.summarize(records, recency);
        let has_active_filters = RecordGrouper::has_active_filters(query, filter);

        info!(
            total_records = records.len(),
            exercise_cards = cards.len(),
            filtered_records = flat.len(),
            record_type = %filter.code(),
            has_active_filters,
            "Built personal records overview"
        );

        RecordsOverview {
            groups: cards,
            records: flat.iter().map(|record| self.card(record, recency)).collect(),
            recent: recent.iter().map(|record| self.card(record, recency)).collect(),
            summary,
            has_active_filters,
        }
    }

    /// Timeline of the focal record's exercise and type, newest first
    pub fn timeline<Tz: TimeZone>(
        &self,
        records: &[PersonalRecord],
        focal: &PersonalRecord,
        recency: &Recency<Tz>,
    ) -> Vec<TimelineEntry> {
        let history = self.grouper.history(records, focal);
        debug!(
            record_id = focal.id,
            exercise_id = focal.exercise_id,
            entries = history.len(),
            "Built record timeline"
        );

        history
            .into_iter()
            .map(|entry| TimelineEntry {
                record_id: entry.record.id,
                value_label: value_label(&entry.record),
                date_label: recency.format_absolute(&entry.record.achieved_at),
                relative_label: recency.format_relative(&entry.record.achieved_at),
                is_latest: entry.is_latest,
            })
            .collect()
    }

    /// Render a single record
    pub fn card<Tz: TimeZone>(&self, record: &PersonalRecord, recency: &Recency<Tz>) -> RecordCard {
        RecordCard {
            record_id: record.id,
            exercise_id: record.exercise_id,
            exercise_name: record.exercise_name().to_owned(),
            exercise_category: record.exercise_category().to_owned(),
            record_type: record.record_type.code().to_owned(),
            type_label: RecordClassifier::label(&record.record_type).to_owned(),
            color: RecordClassifier::color(&record.record_type),
            value_label: value_label(record),
            date_label: recency.format_absolute(&record.achieved_at),
            relative_label: recency.format_relative(&record.achieved_at),
            is_recent: recency.is_within_days(
                &record.achieved_at,
                self.grouper.config().recent_pr_window_days,
            ),
            notes: record.notes.clone(),
        }
    }

    /// Render an exercise group as a grid card
    pub fn exercise_card<Tz: TimeZone>(
        &self,
        group: &ExerciseGroup,
        recency: &Recency<Tz>,
    ) -> ExerciseCard {
        let preview = self.grouper.preview(group);
        ExerciseCard {
            exercise_id: group.exercise_id,
            exercise_name: group.exercise_name.clone(),
            exercise_category: group.exercise_category.clone(),
            has_recent_pr: group.has_recent_pr,
            records: preview
                .records
                .iter()
                .map(|record| self.card(record, recency))
                .collect(),
            hidden_count: preview.hidden_count,
        }
    }
}

fn value_label(record: &PersonalRecord) -> String {
    RecordClassifier::format_value(
        record.value,
        &record.record_type,
        record.display_unit.as_deref(),
    )
}
