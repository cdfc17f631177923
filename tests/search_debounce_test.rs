// ABOUTME: Unit tests for the debounced search query holder
// ABOUTME: Drives the debouncer with explicit instants to check quiet-period behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitai_analytics::intelligence::RecordsConfig;
use fitai_analytics::services::SearchDebouncer;
use std::time::{Duration, Instant};

#[test]
fn test_query_applies_after_quiet_period() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::new(Duration::from_millis(300));

    debouncer.push("sq", start);
    assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
    assert!(debouncer.is_pending());
    assert_eq!(
        debouncer.poll(start + Duration::from_millis(300)),
        Some("sq".to_owned())
    );
    assert_eq!(debouncer.applied(), "sq");
    assert!(!debouncer.is_pending());
}

#[test]
fn test_typing_restarts_quiet_period() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::default();

    debouncer.push("s", start);
    debouncer.push("sq", start + Duration::from_millis(200));
    assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
    assert_eq!(
        debouncer.poll(start + Duration::from_millis(500)),
        Some("sq".to_owned())
    );
}

#[test]
fn test_unchanged_query_is_not_reapplied() {
    let start = Instant::now();
    let mut debouncer = SearchDebouncer::default();

    debouncer.push("bench", start);
    assert!(debouncer.flush().is_some());
    debouncer.push("bench", start);
    assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    assert_eq!(debouncer.applied(), "bench");
}

#[test]
fn test_delay_comes_from_config() {
    let config = RecordsConfig {
        search_debounce_ms: 750,
        ..RecordsConfig::default()
    };
    assert_eq!(
        SearchDebouncer::from_config(&config).delay(),
        Duration::from_millis(750)
    );
    assert_eq!(SearchDebouncer::default().delay(), Duration::from_millis(300));
}
