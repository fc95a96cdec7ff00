use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::date::start_of_day;

/// A target day with no time-of-day significance.
///
/// Only year, month and day take part in equality. Whenever the date has to
/// meet an instant it is anchored at local midnight, which keeps day
/// differences exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// The calendar day `instant` falls on, in the instant's own zone.
    pub fn of_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.date_naive())
    }

    /// Midnight of this day in `tz`.
    pub fn start_of_day_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        start_of_day(self.0, tz)
    }

    /// Serializes local midnight in `tz` as a UTC ISO-8601 instant, the form
    /// the storage layer keeps.
    pub fn to_iso_instant<Tz: TimeZone>(&self, tz: &Tz) -> String {
        self.start_of_day_in(tz)
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Reads an ISO-8601 instant back into the calendar day it denotes in `tz`.
    pub fn from_iso_instant<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<Self> {
        DateTime::parse_from_rfc3339(value.trim())
            .ok()
            .map(|instant| Self::of_instant(&instant.with_timezone(tz)))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A number split into integer text and a single decimal digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberParts {
    pub int_part: String,
    pub decimal_part: String,
}

/// Snapshot of a countdown, recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownMetrics {
    pub has_target_date: bool,
    pub is_past_target: bool,
    pub days_left: i64,
    pub weeks_parts: Option<NumberParts>,
    pub months_parts: Option<NumberParts>,
}

impl CountdownMetrics {
    pub fn without_target() -> Self {
        Self {
            has_target_date: false,
            is_past_target: false,
            days_left: 0,
            weeks_parts: None,
            months_parts: None,
        }
    }

    pub fn past_target(days_left: i64) -> Self {
        Self {
            has_target_date: true,
            is_past_target: true,
            days_left,
            weeks_parts: None,
            months_parts: None,
        }
    }

    /// Weeks and months breakdown, present only while the target lies ahead.
    pub fn breakdown(&self) -> Option<(&NumberParts, &NumberParts)> {
        match (&self.weeks_parts, &self.months_parts) {
            (Some(weeks), Some(months)) => Some((weeks, months)),
            _ => None,
        }
    }
}

/// The three fields a surface persists and feeds back into the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownInput {
    pub title: String,
    pub subtitle: String,
    pub target_date: Option<CalendarDate>,
}
