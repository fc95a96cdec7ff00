// Test fixtures - reusable test data
// Provides consistent reference instants and target dates across test files

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone};
use day_countdown::models::countdown::{CalendarDate, CountdownInput};

/// Fixed UTC+3 zone so results don't depend on the machine running the tests.
pub fn istanbul() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}

/// Sample reference instants
pub mod instants {
    use super::*;

    /// Jan 1, 2026 at local midnight
    pub fn new_year_2026() -> DateTime<FixedOffset> {
        istanbul().with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    /// Jan 1, 2026 late in the evening
    pub fn new_year_2026_evening() -> DateTime<FixedOffset> {
        istanbul().with_ymd_and_hms(2026, 1, 1, 21, 45, 0).unwrap()
    }
}

/// Sample target dates
pub mod dates {
    use super::*;

    pub fn jan_8_2026() -> CalendarDate {
        CalendarDate::from_ymd(2026, 1, 8).unwrap()
    }

    pub fn apr_17_2026() -> CalendarDate {
        CalendarDate::from_ymd(2026, 4, 17).unwrap()
    }

    pub fn leap_day_2028() -> CalendarDate {
        CalendarDate::from_ymd(2028, 2, 29).unwrap()
    }
}

/// A fully filled-in input, as a user would leave it
pub fn holiday_input() -> CountdownInput {
    CountdownInput {
        title: "Tatile".to_string(),
        subtitle: "kaldi!".to_string(),
        target_date: Some(dates::jan_8_2026()),
    }
}
