// Property-based tests for the countdown engine
// Random reference instants and target dates exercise the metrics invariants

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};
use day_countdown::models::countdown::CalendarDate;
use day_countdown::services::countdown::{
    compute_countdown, decompose_to_one_decimal, format_date_for_display, parse_date_input,
};
use proptest::prelude::*;

fn zone(offset_hours: i32) -> FixedOffset {
    FixedOffset::east_opt(offset_hours * 3600).unwrap()
}

fn calendar_date() -> impl Strategy<Value = CalendarDate> {
    (1000..=9999i32, 1..=12u32, 1..=31u32).prop_filter_map("not a real day", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).map(CalendarDate::new)
    })
}

proptest! {
    /// Property: a target strictly ahead always has at least one day left
    #[test]
    fn prop_future_target_has_days_left(
        offset in -11..=12i32,
        target in calendar_date(),
        lead_minutes in 1i64..(3 * 365 * 24 * 60),
    ) {
        let tz = zone(offset);
        let reference = target.start_of_day_in(&tz) - Duration::minutes(lead_minutes);
        let metrics = compute_countdown(Some(target), &reference);

        prop_assert!(metrics.has_target_date);
        prop_assert!(!metrics.is_past_target);
        prop_assert!(metrics.days_left >= 1);
        prop_assert!(metrics.weeks_parts.is_some());
        prop_assert!(metrics.months_parts.is_some());
    }

    /// Property: a target at or before the reference is past, with no breakdown
    #[test]
    fn prop_past_target_has_no_breakdown(
        offset in -11..=12i32,
        target in calendar_date(),
        lag_minutes in 0i64..(3 * 365 * 24 * 60),
    ) {
        let tz = zone(offset);
        let reference = target.start_of_day_in(&tz) + Duration::minutes(lag_minutes);
        let metrics = compute_countdown(Some(target), &reference);

        prop_assert!(metrics.is_past_target);
        prop_assert!(metrics.days_left >= 0);
        prop_assert!(metrics.weeks_parts.is_none());
        prop_assert!(metrics.months_parts.is_none());
    }

    /// Property: no target never reports one, whatever the reference
    #[test]
    fn prop_absent_target(
        offset in -11..=12i32,
        secs in 0i64..4_000_000_000i64,
    ) {
        let reference = zone(offset).timestamp_opt(secs, 0).unwrap();
        let metrics = compute_countdown(None, &reference);
        prop_assert!(!metrics.has_target_date);
        prop_assert_eq!(metrics.days_left, 0);
    }

    /// Property: whole-day distances come back exactly
    #[test]
    fn prop_whole_days_are_exact(
        target in calendar_date(),
        days in 1i64..2000,
    ) {
        let tz = zone(3);
        let reference = target.start_of_day_in(&tz) - Duration::days(days);
        prop_assert_eq!(compute_countdown(Some(target), &reference).days_left, days);
    }

    /// Property: displayed dates always parse back to the same day
    #[test]
    fn prop_display_round_trip(date in calendar_date()) {
        prop_assert_eq!(parse_date_input(&format_date_for_display(date)), Some(date));
    }

    /// Property: the three separators are interchangeable
    #[test]
    fn prop_separators_equivalent(date in calendar_date()) {
        let dotted = format_date_for_display(date);
        prop_assert_eq!(parse_date_input(&dotted.replace('.', "/")), Some(date));
        prop_assert_eq!(parse_date_input(&dotted.replace('.', "-")), Some(date));
    }

    /// Property: decomposition always yields one decimal digit
    #[test]
    fn prop_single_decimal_digit(value in 0.0f64..100_000.0) {
        let parts = decompose_to_one_decimal(value);
        prop_assert_eq!(parts.decimal_part.len(), 1);
        prop_assert!(parts.int_part.chars().all(|c| c.is_ascii_digit()));
    }
}
