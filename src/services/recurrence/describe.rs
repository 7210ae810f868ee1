// Human-readable recurrence summaries for event listings

use chrono::{Datelike, NaiveDateTime};

use crate::models::recurrence::{
    AnnualPattern, Cadence, DaySet, MonthlyPattern, RecurrenceFields, RecurrenceRule, Weekday,
    WeekdaySet,
};
use crate::utils::date::date_for_day_of_year;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render a rule the way event listings present it, e.g.
/// "Weekly on Sunday" or "Monthly on the 2nd Tuesday".
pub fn describe(rule: &RecurrenceRule) -> String {
    match &rule.cadence {
        Cadence::Weekly(days) => format!("Weekly on {}", weekday_names(days)),
        Cadence::Biweekly(days) => format!("Every 2 weeks on {}", weekday_names(days)),
        Cadence::Monthly(MonthlyPattern::OnDays(days)) => {
            format!("Monthly on day {}", day_numbers(days))
        }
        Cadence::Monthly(MonthlyPattern::OnWeekdays(_)) => format!(
            "Monthly on the {} {}",
            ordinal_label(anchor_ordinal(rule.series_start)),
            anchor_weekday(rule.series_start).as_str()
        ),
        Cadence::Annual(AnnualPattern::OnDaysOfYear(days)) => {
            format!("Annually on {}", month_days(days, rule.series_start.year()))
        }
        Cadence::Annual(AnnualPattern::OnWeekdays(_)) => format!(
            "Annually on the {} {} of {}",
            ordinal_label(anchor_ordinal(rule.series_start)),
            anchor_weekday(rule.series_start).as_str(),
            MONTH_NAMES[rule.series_start.month0() as usize]
        ),
    }
}

/// Fields-level convenience: non-recurring or malformed rows describe as
/// the empty string.
pub fn describe_for(fields: &RecurrenceFields, event_start: NaiveDateTime) -> String {
    match fields.to_rule(event_start) {
        Ok(Some(rule)) => describe(&rule),
        _ => String::new(),
    }
}

fn anchor_ordinal(anchor: NaiveDateTime) -> u32 {
    (anchor.day() - 1) / 7 + 1
}

fn anchor_weekday(anchor: NaiveDateTime) -> Weekday {
    Weekday::from_chrono(anchor.weekday())
}

fn ordinal_label(ordinal: u32) -> &'static str {
    match ordinal {
        1 => "1st",
        2 => "2nd",
        3 => "3rd",
        4 => "4th",
        _ => "last",
    }
}

fn weekday_names(days: &WeekdaySet) -> String {
    days.iter()
        .map(Weekday::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn day_numbers(days: &DaySet) -> String {
    days.iter()
        .map(|day| day.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Day-of-year numbers rendered as calendar month-day, resolved against
/// the anchor's year so leap dates come out right.
fn month_days(days: &DaySet, year: i32) -> String {
    days.iter()
        .map(|&day| match date_for_day_of_year(year, day) {
            Some(date) => format!(
                "{} {}",
                MONTH_NAMES[date.month0() as usize],
                date.day()
            ),
            None => format!("day {day}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn rule(cadence: Cadence, series_start: NaiveDateTime) -> RecurrenceRule {
        RecurrenceRule {
            cadence,
            series_start,
            series_end: None,
        }
    }

    #[test]
    fn weekly_lists_weekday_names() {
        let cadence = Cadence::Weekly([Weekday::Sunday, Weekday::Wednesday].into_iter().collect());
        assert_eq!(
            describe(&rule(cadence, at(2024, 1, 7, 10, 0))),
            "Weekly on Sunday, Wednesday"
        );
    }

    #[test]
    fn biweekly_reads_as_every_two_weeks() {
        let cadence = Cadence::Biweekly([Weekday::Monday].into_iter().collect());
        assert_eq!(
            describe(&rule(cadence, at(2024, 1, 1, 9, 0))),
            "Every 2 weeks on Monday"
        );
    }

    #[test]
    fn monthly_by_date_lists_day_numbers() {
        let cadence = Cadence::Monthly(MonthlyPattern::OnDays([1, 15].into_iter().collect()));
        assert_eq!(
            describe(&rule(cadence, at(2024, 1, 1, 19, 30))),
            "Monthly on day 1, 15"
        );
    }

    #[test]
    fn monthly_nth_weekday_uses_the_anchor_position() {
        // Jan 9 2024 is the second Tuesday of its month.
        let cadence = Cadence::Monthly(MonthlyPattern::OnWeekdays(
            [Weekday::Tuesday].into_iter().collect(),
        ));
        assert_eq!(
            describe(&rule(cadence, at(2024, 1, 9, 19, 0))),
            "Monthly on the 2nd Tuesday"
        );
    }

    #[test]
    fn annual_days_render_as_calendar_dates() {
        let cadence = Cadence::Annual(AnnualPattern::OnDaysOfYear([60].into_iter().collect()));
        // Leap anchor year: day 60 is February 29.
        assert_eq!(
            describe(&rule(cadence, at(2024, 2, 29, 12, 0))),
            "Annually on February 29"
        );
    }

    #[test]
    fn annual_nth_weekday_names_the_month() {
        // June 1 2025 is the first Sunday of June.
        let cadence = Cadence::Annual(AnnualPattern::OnWeekdays(
            [Weekday::Sunday].into_iter().collect(),
        ));
        assert_eq!(
            describe(&rule(cadence, at(2025, 6, 1, 10, 0))),
            "Annually on the 1st Sunday of June"
        );
    }

    #[test]
    fn non_recurring_fields_describe_as_empty() {
        let fields = RecurrenceFields::default();
        assert_eq!(describe_for(&fields, at(2024, 1, 1, 9, 0)), "");
    }

    #[test]
    fn malformed_fields_describe_as_empty() {
        let fields = RecurrenceFields {
            is_recurring: true,
            ..Default::default()
        };
        assert_eq!(describe_for(&fields, at(2024, 1, 1, 9, 0)), "");
    }
}
