// ABOUTME: Debounced search query holder for record filtering
// ABOUTME: Applies a query only after a quiet period; the caller supplies every instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::RecordsConfig;
use std::time::{Duration, Instant};

/// Holds the latest typed query until it has been stable for the debounce delay
///
/// No timers are spawned. The caller reports keystrokes with
/// [`push`](Self::push) and asks for the applied query with
/// [`poll`](Self::poll), passing the current instant each time.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
    applied: String,
}

impl SearchDebouncer {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            applied: String::new(),
        }
    }

    /// Create a debouncer using the configured quiet period
    #[must_use]
    pub const fn from_config(config: &RecordsConfig) -> Self {
        Self::new(Duration::from_millis(config.search_debounce_ms))
    }

    /// Record a new query typed at `at`, restarting the quiet period
    pub fn push(&mut self, query: impl Into<String>, at: Instant) {
        self.pending = Some((query.into(), at));
    }

    /// Apply the pending query if its quiet period has elapsed by `now`
    ///
    /// Returns the newly applied query, or `None` when nothing changed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= self.delay);
        if !ready {
            return None;
        }
        self.flush()
    }

    /// Apply the pending query immediately, e.g. on submit
    pub fn flush(&mut self) -> Option<String> {
        let (query, _) = self.pending.take()?;
        if query == self.applied {
            return None;
        }
        self.applied.clone_from(&query);
        Some(query)
    }

    /// Query currently in effect
    #[must_use]
    pub fn applied(&self) -> &str {
        &self.applied
    }

    /// Whether a typed query is waiting for its quiet period
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::from_config(&RecordsConfig::default())
    }
}
