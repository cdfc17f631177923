// ABOUTME: Recency engine classifying record timestamps relative to a reference instant
// ABOUTME: Provides calendar-day checks, half-open day windows, and relative/absolute date labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recency classification
//!
//! A [`Recency`] pins "now" to an explicit instant in the caller's time zone,
//! so every classification is a pure function of its inputs. Elapsed-day
//! counts are floored over whole 24-hour spans; `is_today` and `is_yesterday`
//! compare calendar days in the reference time zone instead.

use crate::constants::recency::{
    ABSOLUTE_DATE_FORMAT, DAYS_PER_WEEK, MILLIS_PER_DAY, RELATIVE_LABEL_LIMIT_DAYS,
    SAME_YEAR_DATE_FORMAT,
};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

/// Reference instant for recency classification
#[derive(Debug, Clone)]
pub struct Recency<Tz: TimeZone> {
    now: DateTime<Tz>,
}

impl Recency<Local> {
    /// Reference the current wall-clock instant in the local time zone
    #[must_use]
    pub fn current() -> Self {
        Self::at(Local::now())
    }
}

impl<Tz: TimeZone> Recency<Tz> {
    /// Reference an explicit instant
    pub const fn at(now: DateTime<Tz>) -> Self {
        Self { now }
    }

    /// The reference instant
    pub const fn now(&self) -> &DateTime<Tz> {
        &self.now
    }

    /// Calendar day of the reference instant
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Calendar day of `date` in the reference time zone
    pub fn local_date(&self, date: &DateTime<Utc>) -> NaiveDate {
        date.with_timezone(&self.now.timezone()).date_naive()
    }

    /// Whole 24-hour spans elapsed since `date`, floored
    ///
    /// Negative for timestamps after the reference instant.
    pub fn days_since(&self, date: &DateTime<Utc>) -> i64 {
        let elapsed = self.now.with_timezone(&Utc) - *date;
        elapsed.num_milliseconds().div_euclid(MILLIS_PER_DAY)
    }

    /// Whether `date` falls on the same calendar day as the reference instant
    pub fn is_today(&self, date: &DateTime<Utc>) -> bool {
        self.local_date(date) == self.today()
    }

    /// Whether `date` falls on the calendar day before the reference instant
    pub fn is_yesterday(&self, date: &DateTime<Utc>) -> bool {
        self.today()
            .pred_opt()
            .is_some_and(|yesterday| self.local_date(date) == yesterday)
    }

    /// Whether fewer than `days` whole days have elapsed since `date`
    ///
    /// Half-open: a timestamp exactly `days` days old is excluded.
    pub fn is_within_days(&self, date: &DateTime<Utc>, days: u32) -> bool {
        self.days_since(date) < i64::from(days)
    }

    /// Whether `date` falls in the reference instant's calendar month
    pub fn is_this_month(&self, date: &DateTime<Utc>) -> bool {
        let today = self.today();
        let day = self.local_date(date);
        day.year() == today.year() && day.month() == today.month()
    }

    /// Relative label: "Today", "Yesterday", "N days ago", "N weeks ago", or a calendar date
    ///
    /// Timestamps after the reference instant read as "Today". From 30 days on
    /// the calendar date is shown, with the year only when it differs from the
    /// reference year.
    pub fn format_relative(&self, date: &DateTime<Utc>) -> String {
        let days = self.days_since(date).max(0);
        match days {
            0 => "Today".to_owned(),
            1 => "Yesterday".to_owned(),
            d if d < DAYS_PER_WEEK => format!("{d} days ago"),
            d if d < RELATIVE_LABEL_LIMIT_DAYS => {
                let weeks = d / DAYS_PER_WEEK;
                if weeks > 1 {
                    format!("{weeks} weeks ago")
                } else {
                    "1 week ago".to_owned()
                }
            }
            _ => {
                let day = self.local_date(date);
                if day.year() == self.today().year() {
                    day.format(SAME_YEAR_DATE_FORMAT).to_string()
                } else {
                    day.format(ABSOLUTE_DATE_FORMAT).to_string()
                }
            }
        }
    }

    /// Calendar label with the year, e.g. "Mar 4, 2025"
    pub fn format_absolute(&self, date: &DateTime<Utc>) -> String {
        self.local_date(date).format(ABSOLUTE_DATE_FORMAT).to_string()
    }
}
