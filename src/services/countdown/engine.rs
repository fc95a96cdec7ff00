//! Countdown computation and date-input parsing.
//!
//! Everything here is a pure function of its arguments. Callers own the
//! target date and pass a fresh reference instant on every refresh.

use chrono::{DateTime, Datelike, Local, TimeZone};

use crate::models::countdown::{CalendarDate, CountdownMetrics, NumberParts};
use crate::utils::date::DAY_IN_MS;

pub const DAYS_IN_WEEK: f64 = 7.0;
/// Fixed month length used for the months breakdown. Not calendar-accurate.
pub const DAYS_IN_MONTH: f64 = 30.0;

/// Computes the countdown from `reference` to local midnight of `target_date`.
pub fn compute_countdown<Tz: TimeZone>(
    target_date: Option<CalendarDate>,
    reference: &DateTime<Tz>,
) -> CountdownMetrics {
    let Some(target) = target_date else {
        return CountdownMetrics::without_target();
    };

    let target_at = target.start_of_day_in(&reference.timezone());
    let diff_ms = target_at
        .signed_duration_since(reference.clone())
        .num_milliseconds();
    let days_left = ceil_days(diff_ms).max(0);
    let is_past_target = diff_ms <= 0;

    if is_past_target || days_left <= 0 {
        return CountdownMetrics::past_target(days_left);
    }

    CountdownMetrics {
        has_target_date: true,
        is_past_target: false,
        days_left,
        weeks_parts: Some(decompose_to_one_decimal(days_left as f64 / DAYS_IN_WEEK)),
        months_parts: Some(decompose_to_one_decimal(days_left as f64 / DAYS_IN_MONTH)),
    }
}

/// [`compute_countdown`] against the current wall-clock time.
pub fn compute_countdown_now(target_date: Option<CalendarDate>) -> CountdownMetrics {
    compute_countdown(target_date, &Local::now())
}

fn ceil_days(diff_ms: i64) -> i64 {
    let whole = diff_ms.div_euclid(DAY_IN_MS);
    if diff_ms.rem_euclid(DAY_IN_MS) > 0 {
        whole + 1
    } else {
        whole
    }
}

/// Rounds `value` half away from zero to one decimal place and splits it into
/// integer text and the single decimal digit.
pub fn decompose_to_one_decimal(value: f64) -> NumberParts {
    if !value.is_finite() {
        return NumberParts {
            int_part: value.to_string(),
            decimal_part: "0".to_string(),
        };
    }

    let tenths = (value * 10.0).round();
    let magnitude = tenths.abs();
    let int_digits = format!("{:.0}", (magnitude / 10.0).trunc());
    let decimal_digit = format!("{:.0}", magnitude % 10.0);

    // -0.04 rounds to zero; keep the sign only when something remains
    let int_part = if tenths < 0.0 {
        format!("-{int_digits}")
    } else {
        int_digits
    };

    NumberParts {
        int_part,
        decimal_part: decimal_digit,
    }
}

/// `D.M.YYYY` with no leading zeros on day or month.
pub fn format_date_for_display(date: CalendarDate) -> String {
    let date = date.naive();
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

/// Parses typed `day.month.year` text.
///
/// `-` and `/` work as separators too. Returns `None` both for blank input
/// and for anything that is not a real calendar day, so callers that need to
/// tell "cleared" from "invalid" check the raw text for blankness first.
pub fn parse_date_input(text: &str) -> Option<CalendarDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace(['-', '/'], ".");
    let parts: Vec<&str> = normalized
        .split('.')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let day: i64 = day.parse().ok()?;
    let month: i64 = month.parse().ok()?;
    let year: i64 = year.parse().ok()?;

    // Two-digit years never round-trip: they would be read as the first
    // century rather than the one the user meant.
    if (0..100).contains(&year) {
        return None;
    }

    let candidate = CalendarDate::from_ymd(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?;

    let naive = candidate.naive();
    let round_trips = i64::from(naive.year()) == year
        && i64::from(naive.month()) == month
        && i64::from(naive.day()) == day;
    round_trips.then_some(candidate)
}
