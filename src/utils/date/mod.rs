// Date utility functions shared by the recurrence engine

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month, leap-year aware.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    last_day_of_month(year, month).map(|d| d.day()).unwrap_or(0)
}

/// Last calendar day of the given month.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// The month after `(year, month)`, carrying into January.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// 1-based ordinal of `date` within its year (Jan 1 = 1).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Calendar date for a 1-based day-of-year. `None` when the ordinal does
/// not exist in that year (day 366 in a common year).
pub fn date_for_day_of_year(year: i32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_yo_opt(year, day)
}
