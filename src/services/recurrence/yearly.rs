// Annual occurrence calculation

use chrono::{Datelike, NaiveDateTime, NaiveTime};

use super::utils::find_nth_weekday_of_month;
use crate::models::recurrence::{AnnualPattern, DaySet};
use crate::utils::date::{date_for_day_of_year, day_of_year};

pub(super) fn next(
    pattern: &AnnualPattern,
    anchor: NaiveDateTime,
    from: NaiveDateTime,
) -> Option<NaiveDateTime> {
    match pattern {
        AnnualPattern::OnDaysOfYear(days) => next_on_days_of_year(days, anchor.time(), from),
        // As with monthly mode, only the anchor's own weekday is honoured.
        AnnualPattern::OnWeekdays(_) => next_on_anchor_weekday(anchor, from),
    }
}

/// Smallest target day-of-year at or after `from` in the current year,
/// else the smallest target that exists next year. Day 366 simply does
/// not exist in a common year and is skipped for that year.
fn next_on_days_of_year(
    days: &DaySet,
    time_of_day: NaiveTime,
    from: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let year = from.year();
    let today = day_of_year(from.date());
    for &day in days {
        if day < today {
            continue;
        }
        let Some(date) = date_for_day_of_year(year, day) else {
            continue;
        };
        let candidate = date.and_time(time_of_day);
        if candidate >= from {
            return Some(candidate);
        }
    }

    days.iter()
        .find_map(|&day| date_for_day_of_year(year + 1, day))
        .map(|date| date.and_time(time_of_day))
}

/// The anchor's ordinal weekday within the anchor's month, searched year
/// by year.
fn next_on_anchor_weekday(anchor: NaiveDateTime, from: NaiveDateTime) -> Option<NaiveDateTime> {
    let weekday = anchor.weekday();
    let ordinal = (anchor.day() - 1) / 7 + 1;
    let month = anchor.month();
    let time_of_day = anchor.time();

    for year in [from.year(), from.year() + 1] {
        if let Some(date) = find_nth_weekday_of_month(year, month, weekday, ordinal) {
            let candidate = date.and_time(time_of_day);
            if candidate >= from {
                return Some(candidate);
            }
        }
    }
    None
}
