// ABOUTME: Groups personal records by exercise and orders, filters, and summarizes them for display
// ABOUTME: Provides recent-PR flags, type-priority sorting, record timelines, search filters, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record grouping and sorting
//!
//! Every projection here is recomputed from the flat record list on demand.
//! Groups carry no identity beyond their exercise id, so callers can discard
//! and regenerate them whenever the underlying records change.

use crate::config::analytics::RecordsConfig;
use crate::models::{PersonalRecord, RecordTypeFilter};
use crate::recency::Recency;
use crate::record_classifier::RecordClassifier;
use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Records of one exercise, as shown on an all-time-bests card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGroup {
    /// Shared exercise id of every member record
    pub exercise_id: i64,
    /// Exercise name taken from the first member record
    pub exercise_name: String,
    /// Exercise category taken from the first member record
    pub exercise_category: String,
    /// Member records in input order
    pub records: Vec<PersonalRecord>,
    /// Whether any member record falls inside the recent-PR window
    #[serde(rename = "hasRecentPR")]
    pub has_recent_pr: bool,
}

/// Priority-sorted head of a group plus the count of records left out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPreview {
    /// Exercise of the previewed group
    pub exercise_id: i64,
    /// First records by type priority
    pub records: Vec<PersonalRecord>,
    /// Records not shown ("+N more")
    pub hidden_count: usize,
}

/// One entry of a single record-type timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// The historical record
    pub record: PersonalRecord,
    /// Whether this is the newest entry of the timeline
    pub is_latest: bool,
}

/// Aggregate counts over a user's records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary {
    /// Number of records
    pub total_records: usize,
    /// Distinct exercises holding at least one record
    pub exercises_with_records: usize,
    /// Records per record-type code
    pub count_by_type: BTreeMap<String, usize>,
    /// Records achieved in the current calendar month, counted over every
    /// record rather than only the capped recent feed
    pub prs_this_month: usize,
    /// Newest records inside the recent-feed window
    pub recent_records: Vec<PersonalRecord>,
}

/// Grouping, ordering and filtering of personal records
#[derive(Debug, Clone, Default)]
pub struct RecordGrouper {
    config: RecordsConfig,
}

impl RecordGrouper {
    /// Create a grouper with the given record settings
    #[must_use]
    pub const fn new(config: RecordsConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    #[must_use]
    pub const fn config(&self) -> &RecordsConfig {
        &self.config
    }

    /// Group records by exercise, sorted by exercise name
    ///
    /// Records whose exercise reference is absent cannot be named or
    /// categorized and are skipped rather than gathered into a placeholder
    /// group. Names compare case-insensitively; equal names fall back to the
    /// exercise id so the order is total.
    pub fn group<Tz: TimeZone>(
        &self,
        records: &[PersonalRecord],
        recency: &Recency<Tz>,
    ) -> Vec<ExerciseGroup> {
        let mut groups: Vec<ExerciseGroup> = Vec::new();
        let mut index_by_exercise: HashMap<i64, usize> = HashMap::new();
        let mut skipped = 0_usize;

        for record in records {
            let Some(exercise) = record.exercise.as_ref() else {
                skipped += 1;
                continue;
            };
            let is_recent =
                recency.is_within_days(&record.achieved_at, self.config.recent_pr_window_days);

            if let Some(&index) = index_by_exercise.get(&exercise.id) {
                let group = &mut groups[index];
                group.records.push(record.clone());
                group.has_recent_pr |= is_recent;
            } else {
                index_by_exercise.insert(exercise.id, groups.len());
                groups.push(ExerciseGroup {
                    exercise_id: exercise.id,
                    exercise_name: exercise.name.clone(),
                    exercise_category: exercise.category.clone(),
                    records: vec![record.clone()],
                    has_recent_pr: is_recent,
                });
            }
        }

        if skipped > 0 {
            debug!(
                skipped,
                "Skipped personal records without an exercise reference"
            );
        }

        groups.sort_by(|a, b| {
            compare_names(&a.exercise_name, &b.exercise_name)
                .then_with(|| a.exercise_id.cmp(&b.exercise_id))
        });
        groups
    }

    /// Concatenate group members back into a flat list, in group order
    #[must_use]
    pub fn flatten(groups: &[ExerciseGroup]) -> Vec<PersonalRecord> {
        groups
            .iter()
            .flat_map(|group| group.records.iter().cloned())
            .collect()
    }

    /// Order records by type priority; ties keep input order
    #[must_use]
    pub fn sort_within_group(records: &[PersonalRecord]) -> Vec<PersonalRecord> {
        let mut sorted = records.to_vec();
        sorted.sort_by_key(|record| RecordClassifier::priority(&record.record_type));
        sorted
    }

    /// Priority-sorted head of a group for card display
    #[must_use]
    pub fn preview(&self, group: &ExerciseGroup) -> GroupPreview {
        let mut records = Self::sort_within_group(&group.records);
        let hidden_count = records.len().saturating_sub(self.config.grid_preview_count);
        records.truncate(self.config.grid_preview_count);
        GroupPreview {
            exercise_id: group.exercise_id,
            records,
            hidden_count,
        }
    }

    /// Timeline of the focal record's exercise and type, newest first
    ///
    /// Capped at the configured history limit; the first entry is flagged as
    /// the latest.
    #[must_use]
    pub fn history(&self, records: &[PersonalRecord], focal: &PersonalRecord) -> Vec<HistoryEntry> {
        let mut timeline: Vec<&PersonalRecord> = records
            .iter()
            .filter(|record| {
                record.exercise_id == focal.exercise_id && record.record_type == focal.record_type
            })
            .collect();
        timeline.sort_by(|a, b| b.achieved_at.cmp(&a.achieved_at));
        timeline.truncate(self.config.history_limit);

        timeline
            .into_iter()
            .enumerate()
            .map(|(index, record)| HistoryEntry {
                record: record.clone(),
                is_latest: index == 0,
            })
            .collect()
    }

    /// Keep groups whose exercise name contains `query`, ignoring case
    ///
    /// An empty or whitespace-only query returns the groups unchanged.
    #[must_use]
    pub fn filter_by_exercise(groups: &[ExerciseGroup], query: &str) -> Vec<ExerciseGroup> {
        let Some(needle) = normalize_query(query) else {
            return groups.to_vec();
        };
        groups
            .iter()
            .filter(|group| group.exercise_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Keep records whose exercise name contains `query`, ignoring case
    ///
    /// Records without an exercise reference never match a non-empty query.
    #[must_use]
    pub fn filter_records_by_exercise(records: &[PersonalRecord], query: &str) -> Vec<PersonalRecord> {
        let Some(needle) = normalize_query(query) else {
            return records.to_vec();
        };
        records
            .iter()
            .filter(|record| {
                record
                    .exercise
                    .as_ref()
                    .is_some_and(|exercise| exercise.name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Keep records matching a record-type filter
    #[must_use]
    pub fn filter_by_type(records: &[PersonalRecord], filter: &RecordTypeFilter) -> Vec<PersonalRecord> {
        records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }

    /// Whether a search query or type filter narrows the record list
    #[must_use]
    pub fn has_active_filters(query: &str, filter: &RecordTypeFilter) -> bool {
        !query.trim().is_empty() || filter.is_active()
    }

    /// Records inside the last `days` days, newest first, capped at `limit`
    pub fn recent<Tz: TimeZone>(
        records: &[PersonalRecord],
        recency: &Recency<Tz>,
        days: u32,
        limit: usize,
    ) -> Vec<PersonalRecord> {
        let mut recent: Vec<&PersonalRecord> = records
            .iter()
            .filter(|record| recency.is_within_days(&record.achieved_at, days))
            .collect();
        recent.sort_by(|a, b| b.achieved_at.cmp(&a.achieved_at));
        recent.into_iter().take(limit).cloned().collect()
    }

    /// Recent-records feed using the configured window and cap
    pub fn recent_feed<Tz: TimeZone>(
        &self,
        records: &[PersonalRecord],
        recency: &Recency<Tz>,
    ) -> Vec<PersonalRecord> {
        Self::recent(
            records,
            recency,
            self.config.recent_feed_days,
            self.config.recent_feed_limit,
        )
    }

    /// Totals, per-type counts, this month's count and the newest records
    pub fn summarize<Tz: TimeZone>(
        &self,
        records: &[PersonalRecord],
        recency: &Recency<Tz>,
    ) -> RecordSummary {
        let exercises: HashSet<i64> = records.iter().map(|record| record.exercise_id).collect();

        let mut count_by_type: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *count_by_type
                .entry(record.record_type.code().to_owned())
                .or_insert(0) += 1;
        }

        let prs_this_month = records
            .iter()
            .filter(|record| recency.is_this_month(&record.achieved_at))
            .count();

        RecordSummary {
            total_records: records.len(),
            exercises_with_records: exercises.len(),
            count_by_type,
            prs_this_month,
            recent_records: Self::recent(
                records,
                recency,
                self.config.recent_feed_days,
                self.config.summary_recent_limit,
            ),
        }
    }
}

fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_names_ignores_case_first() {
        assert_eq!(compare_names("bench press", "Deadlift"), Ordering::Less);
        assert_eq!(compare_names("Squat", "squat"), Ordering::Less);
        assert_eq!(compare_names("Row", "Row"), Ordering::Equal);
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(" Bench "), Some("bench".to_owned()));
    }
}
