// Date utility functions
// Local-midnight anchoring shared by the engine and the refresh scheduler

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};

/// Milliseconds in one calendar day, ignoring DST shifts.
pub const DAY_IN_MS: i64 = 1000 * 60 * 60 * 24;

/// Anchors `date` at the first instant of that day in `tz`.
///
/// A few zones skip midnight on DST change days; in that case the day starts
/// one hour later, which is the first wall-clock time that exists.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

/// First instant of the day after `now`, in `now`'s time zone.
pub fn next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let today = now.date_naive();
    let tomorrow = today.succ_opt().unwrap_or(today);
    start_of_day(tomorrow, &now.timezone())
}
