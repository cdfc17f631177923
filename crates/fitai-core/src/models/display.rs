// ABOUTME: Color tags attached to badges and indicators by the rendering layer
// ABOUTME: A closed set of named tags so every classifier maps onto a known theme color
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named color tag understood by the rendering theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    /// Estimated one-rep max
    Violet,
    /// Max weight
    Blue,
    /// Max reps, ready-to-train
    Green,
    /// Max volume
    Orange,
    /// Best time, rest suggested
    Red,
    /// Longest duration
    Cyan,
    /// Longest distance
    Pink,
    /// Moderate readiness
    Yellow,
    /// Neutral tag for anything unclassified
    Gray,
}

impl BadgeColor {
    /// Theme name of the tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Violet => "violet",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Cyan => "cyan",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
