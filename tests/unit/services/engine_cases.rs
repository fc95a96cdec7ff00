// Parameterized cases for date parsing and number decomposition

use chrono::{FixedOffset, TimeZone};
use day_countdown::models::countdown::CalendarDate;
use day_countdown::services::countdown::{
    compute_countdown, decompose_to_one_decimal, format_date_for_display, parse_date_input,
};
use test_case::test_case;

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

#[test_case("17.4.2026", Some((2026, 4, 17)); "dotted")]
#[test_case("17/4/2026", Some((2026, 4, 17)); "slashed")]
#[test_case("17-4-2026", Some((2026, 4, 17)); "dashed")]
#[test_case("01.01.2027", Some((2027, 1, 1)); "leading zeros")]
#[test_case("29.2.2028", Some((2028, 2, 29)); "leap day")]
#[test_case("", None; "empty")]
#[test_case("31.02.2026", None; "february overflow")]
#[test_case("31.11.2026", None; "thirty day month overflow")]
#[test_case("29.2.2026", None; "non leap year")]
#[test_case("17.4", None; "two segments")]
#[test_case("a.b.c", None; "letters")]
#[test_case("17.4.26", None; "two digit year")]
fn parse_cases(text: &str, expected: Option<(i32, u32, u32)>) {
    let expected = expected.map(|(y, m, d)| date(y, m, d));
    assert_eq!(parse_date_input(text), expected);
}

#[test_case(2026, 4, 7, "7.4.2026"; "single digits")]
#[test_case(2026, 11, 30, "30.11.2026"; "double digits")]
#[test_case(1999, 1, 1, "1.1.1999"; "last century")]
fn format_cases(year: i32, month: u32, day: u32, expected: &str) {
    assert_eq!(format_date_for_display(date(year, month, day)), expected);
}

#[test_case(10.0 / 7.0, "1", "4"; "ten days in weeks")]
#[test_case(7.0 / 30.0, "0", "2"; "one week in months")]
#[test_case(1.0, "1", "0"; "whole number")]
#[test_case(0.05, "0", "1"; "half rounds up")]
#[test_case(99.99, "100", "0"; "carry into integer")]
fn decompose_cases(value: f64, int_part: &str, decimal_part: &str) {
    let parts = decompose_to_one_decimal(value);
    assert_eq!(parts.int_part, int_part);
    assert_eq!(parts.decimal_part, decimal_part);
}

#[test_case(1, 8, 7, "1", "0", "0", "2"; "one week")]
#[test_case(1, 31, 30, "4", "3", "1", "0"; "thirty days")]
#[test_case(1, 2, 1, "0", "1", "0", "0"; "tomorrow")]
fn countdown_cases(
    month: u32,
    day: u32,
    days_left: i64,
    weeks_int: &str,
    weeks_dec: &str,
    months_int: &str,
    months_dec: &str,
) {
    let reference = FixedOffset::east_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .unwrap();
    let metrics = compute_countdown(Some(date(2026, month, day)), &reference);

    assert_eq!(metrics.days_left, days_left);
    let (weeks, months) = metrics.breakdown().expect("target is ahead");
    assert_eq!((weeks.int_part.as_str(), weeks.decimal_part.as_str()), (weeks_int, weeks_dec));
    assert_eq!((months.int_part.as_str(), months.decimal_part.as_str()), (months_int, months_dec));
}
