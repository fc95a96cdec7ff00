use std::fmt;
use std::time::Duration as StdDuration;

use chrono::{DateTime, TimeZone};

use crate::utils::date::next_midnight;

/// Why the surfaces are being re-rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// Title, subtitle or date was edited.
    InputEdited,
    /// A local day boundary passed.
    MidnightPassed,
    /// The host asked for a widget update.
    WidgetRequested,
}

impl fmt::Display for RefreshTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputEdited => write!(f, "input edited"),
            Self::MidnightPassed => write!(f, "midnight passed"),
            Self::WidgetRequested => write!(f, "widget requested"),
        }
    }
}

/// The next instant at which day counts change.
pub fn next_refresh_at<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    next_midnight(now)
}

/// How long to sleep before the next midnight refresh.
pub fn duration_until_next_refresh<Tz: TimeZone>(now: &DateTime<Tz>) -> StdDuration {
    next_refresh_at(now)
        .signed_duration_since(now.clone())
        .to_std()
        .unwrap_or_else(|_| StdDuration::from_secs(0))
}
