// Occurrence calculation for recurring events
// Dispatches by cadence to the per-frequency algorithms

mod describe;
mod monthly;
mod utils;
mod weekly;
mod yearly;

pub use describe::{describe, describe_for};

use chrono::NaiveDateTime;

use crate::models::recurrence::{Cadence, RecurrenceFields, RecurrenceRule};

/// Compute the earliest occurrence of `rule` at or after `from`.
///
/// The result carries the series anchor's time-of-day. `None` means the
/// series has no further occurrence: it ended before `from`, or the rule
/// produces no match inside its bounded search window.
///
/// Calling again with the returned instant yields the same instant; the
/// search is inclusive of `from`.
pub fn next_occurrence(rule: &RecurrenceRule, from: NaiveDateTime) -> Option<NaiveDateTime> {
    if let Some(end) = rule.series_end {
        if from > end {
            return None;
        }
    }
    if from < rule.series_start {
        // The series has not begun; the anchor itself is the first
        // occurrence, whatever the pattern would select.
        return clip_to_end(rule, rule.series_start);
    }

    let candidate = match &rule.cadence {
        Cadence::Weekly(days) => weekly::next_weekly(days, rule.series_start, from),
        Cadence::Biweekly(days) => weekly::next_biweekly(days, rule.series_start, from),
        Cadence::Monthly(pattern) => monthly::next(pattern, rule.series_start, from),
        Cadence::Annual(pattern) => yearly::next(pattern, rule.series_start, from),
    }?;

    clip_to_end(rule, candidate)
}

/// Same as [`next_occurrence`], starting from raw persisted fields.
///
/// Rows that claim to recur but fail validation degrade to `None`; the
/// read path treats them exactly like a finished series.
pub fn next_occurrence_for(
    fields: &RecurrenceFields,
    event_start: NaiveDateTime,
    from: NaiveDateTime,
) -> Option<NaiveDateTime> {
    match fields.to_rule(event_start) {
        Ok(Some(rule)) => next_occurrence(&rule, from),
        Ok(None) => None,
        Err(err) => {
            log::debug!("ignoring malformed recurrence fields: {err}");
            None
        }
    }
}

/// An event is upcoming when its next occurrence lies strictly in the
/// future; an occurrence happening at exactly `now` classifies as past.
pub fn is_upcoming(rule: &RecurrenceRule, now: NaiveDateTime) -> bool {
    matches!(next_occurrence(rule, now), Some(at) if at > now)
}

fn clip_to_end(rule: &RecurrenceRule, candidate: NaiveDateTime) -> Option<NaiveDateTime> {
    match rule.series_end {
        Some(end) if candidate > end => None,
        _ => Some(candidate),
    }
}
