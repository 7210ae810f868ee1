// Test fixtures - reusable dates and rules
// Provides consistent test data across all test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use flock_recurrence::models::recurrence::{
    AnnualPattern, Cadence, MonthlyPattern, RecurrenceRule, Weekday,
};

/// Build an instant from calendar parts.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn unbounded(cadence: Cadence, series_start: NaiveDateTime) -> RecurrenceRule {
    RecurrenceRule {
        cadence,
        series_start,
        series_end: None,
    }
}

/// Every Sunday at 10:00, anchored on Sunday Jan 7 2024.
pub fn weekly_sundays() -> RecurrenceRule {
    unbounded(
        Cadence::Weekly([Weekday::Sunday].into_iter().collect()),
        at(2024, 1, 7, 10, 0),
    )
}

/// Every other Monday at 09:00, anchored on Monday Jan 1 2024 (week 0).
pub fn biweekly_mondays() -> RecurrenceRule {
    unbounded(
        Cadence::Biweekly([Weekday::Monday].into_iter().collect()),
        at(2024, 1, 1, 9, 0),
    )
}

/// The 31st of each month at 18:00.
pub fn monthly_day_31() -> RecurrenceRule {
    unbounded(
        Cadence::Monthly(MonthlyPattern::OnDays([31].into_iter().collect())),
        at(2024, 1, 31, 18, 0),
    )
}

/// The 1st and 15th of each month at 19:30.
pub fn monthly_first_and_fifteenth() -> RecurrenceRule {
    unbounded(
        Cadence::Monthly(MonthlyPattern::OnDays([1, 15].into_iter().collect())),
        at(2024, 1, 1, 19, 30),
    )
}

/// The 2nd Tuesday of each month at 19:00, anchored on Jan 9 2024.
pub fn monthly_second_tuesday() -> RecurrenceRule {
    unbounded(
        Cadence::Monthly(MonthlyPattern::OnWeekdays(
            [Weekday::Tuesday].into_iter().collect(),
        )),
        at(2024, 1, 9, 19, 0),
    )
}

/// Day 60 of each year at 12:00 (Feb 29 in a leap year, Mar 1 otherwise).
pub fn annual_day_60() -> RecurrenceRule {
    unbounded(
        Cadence::Annual(AnnualPattern::OnDaysOfYear([60].into_iter().collect())),
        at(2024, 2, 29, 12, 0),
    )
}

/// The 1st Sunday of June every year at 10:00, anchored on Jun 1 2025.
pub fn annual_first_june_sunday() -> RecurrenceRule {
    unbounded(
        Cadence::Annual(AnnualPattern::OnWeekdays(
            [Weekday::Sunday].into_iter().collect(),
        )),
        at(2025, 6, 1, 10, 0),
    )
}
