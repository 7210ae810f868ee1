// Weekly and biweekly occurrence scans

use chrono::{Datelike, NaiveDateTime};

use super::utils::scan_days;
use crate::models::recurrence::{Weekday, WeekdaySet};

/// One day past a full week: when `from`'s own weekday matches but its
/// time-of-day has already gone by, the match is the same weekday one
/// week out.
const WEEKLY_SCAN_DAYS: i64 = 8;

/// One day past a full biweekly cycle, for the same reason.
const BIWEEKLY_SCAN_DAYS: i64 = 15;

pub(super) fn next_weekly(
    days: &WeekdaySet,
    anchor: NaiveDateTime,
    from: NaiveDateTime,
) -> Option<NaiveDateTime> {
    scan_days(from, anchor.time(), WEEKLY_SCAN_DAYS, |date| {
        days.contains(&Weekday::from_chrono(date.weekday()))
    })
}

pub(super) fn next_biweekly(
    days: &WeekdaySet,
    anchor: NaiveDateTime,
    from: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let anchor_date = anchor.date();
    scan_days(from, anchor.time(), BIWEEKLY_SCAN_DAYS, |date| {
        if !days.contains(&Weekday::from_chrono(date.weekday())) {
            return false;
        }
        // Only even whole-week offsets from the anchor are in cycle.
        let weeks = (date - anchor_date).num_days().div_euclid(7);
        weeks % 2 == 0
    })
}
