// Monthly occurrence calculation

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::utils::find_nth_weekday_of_month;
use crate::models::recurrence::{DaySet, MonthlyPattern};
use crate::utils::date::{days_in_month, next_month};

pub(super) fn next(
    pattern: &MonthlyPattern,
    anchor: NaiveDateTime,
    from: NaiveDateTime,
) -> Option<NaiveDateTime> {
    match pattern {
        MonthlyPattern::OnDays(days) => next_on_days(days, anchor.time(), from),
        // Only the anchor's own weekday is honoured in this mode; extra
        // weekdays in the stored set are ignored.
        MonthlyPattern::OnWeekdays(_) => next_on_anchor_weekday(anchor, from),
    }
}

/// Search the current month, then the next month only. Target days beyond
/// a month's length do not exist in that month; they are skipped, never
/// clamped or rolled over to a different day.
fn next_on_days(days: &DaySet, time_of_day: NaiveTime, from: NaiveDateTime) -> Option<NaiveDateTime> {
    let (year, month) = (from.year(), from.month());
    let len = days_in_month(year, month);
    for &day in days {
        if day > len {
            continue;
        }
        let candidate = NaiveDate::from_ymd_opt(year, month, day)?.and_time(time_of_day);
        if candidate >= from {
            return Some(candidate);
        }
    }

    // Nothing left this month: the first target day that exists next month.
    let (year, month) = next_month(year, month);
    let len = days_in_month(year, month);
    let day = days.iter().copied().find(|&day| day >= 1 && day <= len)?;
    Some(NaiveDate::from_ymd_opt(year, month, day)?.and_time(time_of_day))
}

/// "Nth weekday of the month" mode. The ordinal is fixed once by the
/// anchor's position within its own month.
fn next_on_anchor_weekday(anchor: NaiveDateTime, from: NaiveDateTime) -> Option<NaiveDateTime> {
    let weekday = anchor.weekday();
    let ordinal = (anchor.day() - 1) / 7 + 1;
    let time_of_day = anchor.time();

    let (mut year, mut month) = (from.year(), from.month());
    for _ in 0..2 {
        if let Some(date) = find_nth_weekday_of_month(year, month, weekday, ordinal) {
            let candidate = date.and_time(time_of_day);
            if candidate >= from {
                return Some(candidate);
            }
        }
        let (next_year, next_month) = next_month(year, month);
        year = next_year;
        month = next_month;
    }
    None
}
