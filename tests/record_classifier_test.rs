// ABOUTME: Unit tests for record classification and value formatting
// ABOUTME: Covers labels, color tags, priorities, type-specific formats, and improvement rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitai_analytics::intelligence::RecordClassifier;
use fitai_analytics::models::{BadgeColor, RecordType, RecordTypeFilter};

#[test]
fn test_labels_for_known_types() {
    let expected = [
        (RecordType::OneRepMax, "Est. 1RM"),
        (RecordType::MaxWeight, "Max Weight"),
        (RecordType::MaxReps, "Max Reps"),
        (RecordType::MaxVolume, "Max Volume"),
        (RecordType::BestTime, "Best Time"),
        (RecordType::LongestDuration, "Duration"),
        (RecordType::LongestDistance, "Distance"),
    ];
    for (record_type, label) in expected {
        assert_eq!(RecordClassifier::label(&record_type), label);
    }
}

#[test]
fn test_every_known_type_classifies_totally() {
    for record_type in RecordType::KNOWN {
        assert!(!RecordClassifier::label(&record_type).is_empty());
        assert_ne!(RecordClassifier::color(&record_type), BadgeColor::Gray);
        assert!(RecordClassifier::priority(&record_type) <= 7);
        assert!(!RecordClassifier::format_value(1.0, &record_type, None).is_empty());
    }
}

#[test]
fn test_unknown_code_falls_back_to_raw_label_and_neutral_color() {
    let classification = RecordClassifier::classify("fastest_lap");
    assert_eq!(classification.label, "fastest_lap");
    assert_eq!(classification.color, BadgeColor::Gray);
    assert_eq!(classification.priority, 99);
    assert!(!classification.record_type.is_known());
}

#[test]
fn test_filter_label_includes_all_types() {
    assert_eq!(
        RecordClassifier::filter_label(&RecordTypeFilter::All),
        "All Types"
    );
    assert_eq!(
        RecordClassifier::filter_label(&RecordTypeFilter::from_code("max_reps")),
        "Max Reps"
    );
}

#[test]
fn test_color_tags() {
    assert_eq!(RecordClassifier::color(&RecordType::OneRepMax), BadgeColor::Violet);
    assert_eq!(RecordClassifier::color(&RecordType::MaxWeight), BadgeColor::Blue);
    assert_eq!(RecordClassifier::color(&RecordType::MaxReps), BadgeColor::Green);
    assert_eq!(RecordClassifier::color(&RecordType::MaxVolume), BadgeColor::Orange);
    assert_eq!(RecordClassifier::color(&RecordType::BestTime), BadgeColor::Red);
    assert_eq!(RecordClassifier::color(&RecordType::LongestDuration), BadgeColor::Cyan);
    assert_eq!(RecordClassifier::color(&RecordType::LongestDistance), BadgeColor::Pink);
}

#[test]
fn test_format_reps() {
    assert_eq!(
        RecordClassifier::format_value(0.0, &RecordType::MaxReps, None),
        "0 reps"
    );
    assert_eq!(
        RecordClassifier::format_value(12.0, &RecordType::MaxReps, Some("kg")),
        "12 reps"
    );
}

#[test]
fn test_format_times() {
    assert_eq!(
        RecordClassifier::format_value(95.0, &RecordType::BestTime, None),
        "1m 35s"
    );
    assert_eq!(
        RecordClassifier::format_value(45.0, &RecordType::LongestDuration, None),
        "45s"
    );
    assert_eq!(
        RecordClassifier::format_value(3600.0, &RecordType::LongestDuration, None),
        "60m 0s"
    );
}

#[test]
fn test_format_distances() {
    assert_eq!(
        RecordClassifier::format_value(500.0, &RecordType::LongestDistance, None),
        "500 m"
    );
    assert_eq!(
        RecordClassifier::format_value(1500.0, &RecordType::LongestDistance, None),
        "1.50 km"
    );
    assert_eq!(
        RecordClassifier::format_value(1000.0, &RecordType::LongestDistance, None),
        "1.00 km"
    );
}

#[test]
fn test_distance_rounding_up_to_a_kilometer_switches_units() {
    assert_eq!(
        RecordClassifier::format_value(999.4, &RecordType::LongestDistance, None),
        "999 m"
    );
    assert_eq!(
        RecordClassifier::format_value(999.6, &RecordType::LongestDistance, None),
        "1.00 km"
    );
}

#[test]
fn test_format_weights() {
    assert_eq!(
        RecordClassifier::format_value(102.3, &RecordType::MaxWeight, Some("lb")),
        "102.3 lb"
    );
    assert_eq!(
        RecordClassifier::format_value(100.0, &RecordType::OneRepMax, None),
        "100.0 kg"
    );
    assert_eq!(
        RecordClassifier::format_value(0.0, &RecordType::MaxVolume, None),
        "0.0 kg"
    );
}

#[test]
fn test_format_unknown_type_uses_weight_rule() {
    let unknown = RecordType::from_code("heaviest_carry");
    assert_eq!(
        RecordClassifier::format_value(42.34, &unknown, Some("kg")),
        "42.3 kg"
    );
}

#[test]
fn test_format_guards_invalid_values() {
    assert_eq!(
        RecordClassifier::format_value(f64::NAN, &RecordType::MaxReps, None),
        "0 reps"
    );
    assert_eq!(
        RecordClassifier::format_value(-5.0, &RecordType::BestTime, None),
        "0s"
    );
}

#[test]
fn test_priority_order() {
    let ordered: Vec<u8> = RecordType::KNOWN
        .iter()
        .map(RecordClassifier::priority)
        .collect();
    assert_eq!(ordered, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_beats_existing() {
    assert!(RecordClassifier::beats_existing(10.0, None, &RecordType::MaxReps));
    assert!(RecordClassifier::beats_existing(11.0, Some(10.0), &RecordType::MaxReps));
    assert!(!RecordClassifier::beats_existing(10.0, Some(10.0), &RecordType::MaxWeight));
    assert!(RecordClassifier::beats_existing(58.0, Some(60.0), &RecordType::BestTime));
    assert!(!RecordClassifier::beats_existing(61.0, Some(60.0), &RecordType::BestTime));
}

#[test]
fn test_estimate_one_rep_max() {
    assert!((RecordClassifier::estimate_one_rep_max(100.0, 1) - 100.0).abs() < 0.001);
    assert!((RecordClassifier::estimate_one_rep_max(100.0, 0) - 100.0).abs() < 0.001);
    assert!((RecordClassifier::estimate_one_rep_max(100.0, 10) - 133.333).abs() < 0.001);
}

#[test]
fn test_record_type_serde_round_trips_unknown_codes() {
    let parsed: RecordType = serde_json::from_str("\"one_rep_max\"").unwrap();
    assert_eq!(parsed, RecordType::OneRepMax);

    let unknown: RecordType = serde_json::from_str("\"fastest_lap\"").unwrap();
    assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"fastest_lap\"");
}
