// Recurrence module
// Declarative repeat rules read back from persisted event records

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weekday with the persisted indexing: 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }

    /// Map a stored weekday index to the enum. Indices outside 0-6 are
    /// rejected rather than wrapped.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// The persisted index, 0 = Sunday.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }

    pub fn all() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }
}

/// How often a recurring event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
    Annually,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Annually => "annually",
        }
    }

    /// Parse the persisted `recurrence_type` column.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weekly" => Some(Self::Weekly),
            "biweekly" => Some(Self::Biweekly),
            "monthly" => Some(Self::Monthly),
            "annually" => Some(Self::Annually),
            _ => None,
        }
    }
}

/// Which column family selects the occurrences of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Occurrences fall on a set of weekdays (`recurrence_days`).
    ByWeekday,
    /// Occurrences fall on explicit day numbers (`recurrence_dates`).
    ByDate,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ByWeekday => "by_weekday",
            Self::ByDate => "by_date",
        }
    }

    /// Parse the persisted `recurrence_pattern` column.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "by_weekday" => Some(Self::ByWeekday),
            "by_date" => Some(Self::ByDate),
            _ => None,
        }
    }
}

pub type WeekdaySet = BTreeSet<Weekday>;
pub type DaySet = BTreeSet<u32>;

/// Monthly selection mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthlyPattern {
    /// Specific days of the month, 1-31. Days beyond a month's length are
    /// skipped in that month, never clamped.
    OnDays(DaySet),
    /// The same ordinal weekday as the series anchor ("2nd Tuesday"). The
    /// stored weekday set is carried but the calculator only honours the
    /// anchor's own weekday.
    OnWeekdays(WeekdaySet),
}

/// Annual selection mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnualPattern {
    /// 1-based days of the year, 1-366. Day 366 only exists in leap years.
    OnDaysOfYear(DaySet),
    /// The anchor's ordinal weekday within the anchor's month, every year.
    OnWeekdays(WeekdaySet),
}

/// Repeat cadence. Weekly cadences only carry a weekday set; a date
/// pattern on them is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cadence {
    /// Every week on the given weekdays.
    Weekly(WeekdaySet),
    /// Every other week, counted in whole weeks from the series anchor.
    Biweekly(WeekdaySet),
    Monthly(MonthlyPattern),
    Annual(AnnualPattern),
}

/// A validated, immutable repeat rule.
///
/// The anchor's time-of-day is the time-of-day of every computed
/// occurrence. `series_end` bounds the series: no occurrence exists
/// strictly after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub cadence: Cadence,
    pub series_start: NaiveDateTime,
    pub series_end: Option<NaiveDateTime>,
}

/// Why a recurring row could not be turned into a usable rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unrecognised recurrence type {0:?}")]
    UnknownFrequency(Option<String>),
    #[error("unrecognised recurrence pattern {0:?}")]
    UnknownPattern(Option<String>),
    #[error("{} recurrence does not support a date pattern", .0.as_str())]
    DatePatternUnsupported(Frequency),
    #[error("weekday pattern with no weekdays")]
    EmptyWeekdays,
    #[error("date pattern with no dates")]
    EmptyDates,
    #[error("weekday index {0} is outside 0-6")]
    WeekdayOutOfRange(u8),
}

/// Recurrence columns exactly as stored with an event record.
///
/// Constructed fresh from the persisted row whenever a calculation is
/// needed; [`RecurrenceFields::to_rule`] turns the row into a validated
/// [`RecurrenceRule`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceFields {
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_type: Option<String>,
    #[serde(default)]
    pub recurrence_pattern: Option<String>,
    /// Weekday indices, 0 = Sunday .. 6 = Saturday.
    #[serde(default)]
    pub recurrence_days: Vec<u8>,
    /// Day-of-month (monthly) or day-of-year (annual) numbers, 1-based.
    #[serde(default)]
    pub recurrence_dates: Vec<u32>,
    #[serde(default)]
    pub recurrence_start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub recurrence_end_date: Option<NaiveDateTime>,
}

impl RecurrenceFields {
    /// Parse the recurrence columns out of a stored event row (a JSON
    /// object). Unrelated fields in the row are ignored.
    pub fn from_record(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate the row into a rule.
    ///
    /// `Ok(None)` means the event does not recur. `Err` means the row
    /// claims to recur but is incomplete or inconsistent; callers on the
    /// read path treat that the same as "no next occurrence".
    ///
    /// `event_start` anchors the series when `recurrence_start_date` was
    /// not stored separately.
    pub fn to_rule(
        &self,
        event_start: NaiveDateTime,
    ) -> Result<Option<RecurrenceRule>, RuleError> {
        if !self.is_recurring {
            return Ok(None);
        }

        let frequency = self
            .recurrence_type
            .as_deref()
            .and_then(Frequency::parse)
            .ok_or_else(|| RuleError::UnknownFrequency(self.recurrence_type.clone()))?;
        let pattern = self
            .recurrence_pattern
            .as_deref()
            .and_then(PatternKind::parse)
            .ok_or_else(|| RuleError::UnknownPattern(self.recurrence_pattern.clone()))?;

        let cadence = match (frequency, pattern) {
            (Frequency::Weekly, PatternKind::ByWeekday) => Cadence::Weekly(self.weekday_set()?),
            (Frequency::Biweekly, PatternKind::ByWeekday) => {
                Cadence::Biweekly(self.weekday_set()?)
            }
            (Frequency::Weekly | Frequency::Biweekly, PatternKind::ByDate) => {
                return Err(RuleError::DatePatternUnsupported(frequency));
            }
            (Frequency::Monthly, PatternKind::ByDate) => {
                Cadence::Monthly(MonthlyPattern::OnDays(self.date_set()?))
            }
            (Frequency::Monthly, PatternKind::ByWeekday) => {
                Cadence::Monthly(MonthlyPattern::OnWeekdays(self.weekday_set()?))
            }
            (Frequency::Annually, PatternKind::ByDate) => {
                Cadence::Annual(AnnualPattern::OnDaysOfYear(self.date_set()?))
            }
            (Frequency::Annually, PatternKind::ByWeekday) => {
                Cadence::Annual(AnnualPattern::OnWeekdays(self.weekday_set()?))
            }
        };

        Ok(Some(RecurrenceRule {
            cadence,
            series_start: self.recurrence_start_date.unwrap_or(event_start),
            series_end: self.recurrence_end_date,
        }))
    }

    fn weekday_set(&self) -> Result<WeekdaySet, RuleError> {
        if self.recurrence_days.is_empty() {
            return Err(RuleError::EmptyWeekdays);
        }
        self.recurrence_days
            .iter()
            .map(|&index| Weekday::from_index(index).ok_or(RuleError::WeekdayOutOfRange(index)))
            .collect()
    }

    fn date_set(&self) -> Result<DaySet, RuleError> {
        if self.recurrence_dates.is_empty() {
            return Err(RuleError::EmptyDates);
        }
        Ok(self.recurrence_dates.iter().copied().collect())
    }
}
