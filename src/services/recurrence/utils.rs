// Shared scan and positional-weekday helpers

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::utils::date::last_day_of_month;

/// Walk forward day by day from `from`'s calendar date, pairing each date
/// accepted by `matches` with `time_of_day`, and return the first
/// candidate at or after `from`. Bounded by `limit` days.
pub(super) fn scan_days(
    from: NaiveDateTime,
    time_of_day: NaiveTime,
    limit: i64,
    mut matches: impl FnMut(NaiveDate) -> bool,
) -> Option<NaiveDateTime> {
    let start = from.date();
    for offset in 0..limit {
        let date = start + Duration::days(offset);
        if !matches(date) {
            continue;
        }
        let candidate = date.and_time(time_of_day);
        if candidate >= from {
            return Some(candidate);
        }
    }
    None
}

/// Locate the nth `weekday` of a month: the first such weekday plus
/// `(ordinal - 1)` weeks. When that overflows the month and the ordinal is
/// 5, the month simply has no fifth such weekday and the last one stands
/// in; ordinals 1-4 never overflow.
pub(super) fn find_nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    ordinal: u32,
) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = days_between_weekdays(first.weekday(), weekday);
    let first_hit = first + Duration::days(offset);
    let candidate = first_hit + Duration::days(7 * (ordinal as i64 - 1));

    if candidate.month() == month {
        return Some(candidate);
    }
    if ordinal == 5 {
        return last_weekday_of_month(year, month, weekday);
    }
    None
}

/// Last occurrence of `weekday` within the month.
pub(super) fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last = last_day_of_month(year, month)?;
    let back = days_between_weekdays(weekday, last.weekday());
    Some(last - Duration::days(back))
}

/// Days to step forward from weekday `from` to reach weekday `to`, in 0-6.
fn days_between_weekdays(from: Weekday, to: Weekday) -> i64 {
    (to.num_days_from_monday() as i64 - from.num_days_from_monday() as i64).rem_euclid(7)
}
