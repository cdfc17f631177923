// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for record display, recency windows, volume balance, and readiness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace. Values that can be overridden at runtime live in the
//! intelligence crate's configuration types and default to the values here.

/// Personal record display and history constants
pub mod records {
    /// Placeholder shown when the referenced exercise was deleted
    pub const UNKNOWN_EXERCISE_NAME: &str = "Unknown Exercise";
    /// Placeholder category when the referenced exercise was deleted
    pub const UNKNOWN_EXERCISE_CATEGORY: &str = "Unknown";
    /// Label for the synthetic filter value matching every record type
    pub const ALL_TYPES_LABEL: &str = "All Types";
    /// Filter code for the synthetic "all" value
    pub const ALL_TYPES_CODE: &str = "all";
    /// Unit used for weight-based records when none is stored
    pub const DEFAULT_WEIGHT_UNIT: &str = "kg";
    /// Sort priority for record types this build does not recognize
    pub const UNKNOWN_TYPE_PRIORITY: u8 = 99;
    /// Maximum entries in a single record-type timeline
    pub const HISTORY_LIMIT: usize = 10;
    /// Records shown per exercise card before collapsing into "+N more"
    pub const GRID_PREVIEW_COUNT: usize = 3;
    /// Divisor in the Epley one-rep-max estimate
    pub const EPLEY_REP_DIVISOR: f64 = 30.0;
}

/// Recency windows and date formatting
pub mod recency {
    /// Milliseconds in one day
    pub const MILLIS_PER_DAY: i64 = 86_400_000;
    /// Days in one week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Elapsed days at which relative labels give way to calendar dates
    pub const RELATIVE_LABEL_LIMIT_DAYS: i64 = 30;
    /// Window for flagging an exercise group as having a recent record
    pub const RECENT_PR_WINDOW_DAYS: u32 = 7;
    /// Window of the recent-records feed
    pub const RECENT_FEED_DAYS: u32 = 30;
    /// Row cap of the recent-records feed
    pub const RECENT_FEED_LIMIT: usize = 20;
    /// Recent records embedded in the summary
    pub const SUMMARY_RECENT_LIMIT: usize = 5;
    /// Suggested quiet period before a search query is applied
    pub const SEARCH_DEBOUNCE_MS: u64 = 300;
    /// Calendar label including the year ("Mar 4, 2025")
    pub const ABSOLUTE_DATE_FORMAT: &str = "%b %-d, %Y";
    /// Calendar label within the current year ("Mar 4")
    pub const SAME_YEAR_DATE_FORMAT: &str = "%b %-d";
}

/// Muscle volume distribution and donut chart geometry
pub mod balance {
    /// Default chart diameter in drawing units
    pub const CHART_DIAMETER: f64 = 180.0;
    /// Default stroke width of each arc
    pub const STROKE_WIDTH: f64 = 24.0;
    /// Max/min share ratio above which one group is flagged as overtrained
    pub const DOMINANCE_RATIO: f64 = 3.0;
    /// Share of total volume (percent) above which one group dominates
    pub const SHARE_THRESHOLD_PERCENT: f64 = 35.0;
    /// Floor applied to the minimum share before computing the ratio
    pub const MIN_SHARE_FLOOR_PERCENT: f64 = 1.0;
    /// Minimum number of groups for an imbalance verdict
    pub const MIN_GROUPS_FOR_IMBALANCE: usize = 2;
    /// Volume at which display switches to thousands ("1.5k")
    pub const THOUSANDS_DISPLAY_THRESHOLD: f64 = 1000.0;
    /// Color used when no palette entry or fallback applies
    pub const NEUTRAL_COLOR: &str = "#868e96";

    /// Standard palette keyed by lowercase muscle group name
    pub const PALETTE: &[(&str, &str)] = &[
        ("chest", "#fa5252"),
        ("back", "#228be6"),
        ("lats", "#1c7ed6"),
        ("shoulders", "#fd7e14"),
        ("arms", "#7950f2"),
        ("biceps", "#7950f2"),
        ("triceps", "#be4bdb"),
        ("forearms", "#15aabf"),
        ("legs", "#40c057"),
        ("quadriceps", "#40c057"),
        ("hamstrings", "#12b886"),
        ("glutes", "#e64980"),
        ("calves", "#82c91e"),
        ("core", "#fab005"),
        ("abs", "#fab005"),
        ("obliques", "#f59f00"),
        ("traps", "#4c6ef5"),
    ];

    /// Rotation used for muscle groups missing from the palette
    pub const FALLBACK_ROTATION: &[&str] =
        &["#495057", "#5c7cfa", "#20c997", "#ff922b", "#f06595", "#94d82d"];
}

/// Readiness score presentation
pub mod readiness {
    /// Lowest score of the "ready" band
    pub const READY_THRESHOLD: f64 = 70.0;
    /// Lowest score of the "moderate" band
    pub const MODERATE_THRESHOLD: f64 = 40.0;
    /// Upper bound of the score scale
    pub const MAX_SCORE: f64 = 100.0;
    /// Default recommendation for the "ready" band
    pub const READY_RECOMMENDATION: &str = "Ready for hard training!";
    /// Default recommendation for the "moderate" band
    pub const MODERATE_RECOMMENDATION: &str = "Light training recommended";
    /// Default recommendation for the "low" band
    pub const LOW_RECOMMENDATION: &str = "Rest day suggested";
}

/// Unit conversion
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Percentage multiplier
    pub const PERCENTAGE_MULTIPLIER: f64 = 100.0;
}

/// Service names for structured logging
pub mod service_names {
    /// Analytics engine service name
    pub const FITAI_ANALYTICS: &str = "fitai-analytics";
}
