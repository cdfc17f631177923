// ABOUTME: Personal record display configuration
// ABOUTME: Configures recent-PR window, timeline and preview caps, recent feed, and search debounce
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::records::{GRID_PREVIEW_COUNT, HISTORY_LIMIT};
use crate::constants::recency::{
    RECENT_FEED_DAYS, RECENT_FEED_LIMIT, RECENT_PR_WINDOW_DAYS, SEARCH_DEBOUNCE_MS,
    SUMMARY_RECENT_LIMIT,
};
use serde::{Deserialize, Serialize};

/// Settings for record grouping, timelines and feeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Days a record stays flagged as a recent PR
    pub recent_pr_window_days: u32,
    /// Maximum entries of a single record-type timeline
    pub history_limit: usize,
    /// Records shown per exercise card before "+N more"
    pub grid_preview_count: usize,
    /// Days covered by the recent-records feed
    pub recent_feed_days: u32,
    /// Maximum entries of the recent-records feed
    pub recent_feed_limit: usize,
    /// Recent records embedded in the summary
    pub summary_recent_limit: usize,
    /// Quiet period before a search query is applied
    pub search_debounce_ms: u64,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            recent_pr_window_days: RECENT_PR_WINDOW_DAYS,
            history_limit: HISTORY_LIMIT,
            grid_preview_count: GRID_PREVIEW_COUNT,
            recent_feed_days: RECENT_FEED_DAYS,
            recent_feed_limit: RECENT_FEED_LIMIT,
            summary_recent_limit: SUMMARY_RECENT_LIMIT,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
        }
    }
}
