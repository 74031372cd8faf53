//! Calendar date of an exercise entry.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

/// Date-only input formats accepted from callers.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%a %b %d %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

/// Date-time input formats without an offset; the time part is dropped.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Years that keep a fixed-width `YYYY-MM-DD` form, so stored days order
/// the same as text and as dates.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// The day an exercise happened.
///
/// Unparseable input is not rejected: it is kept as [`ExerciseDate::Invalid`],
/// which renders as `Invalid Date` and never matches a date-bounded filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseDate {
    /// A calendar day.
    Day(NaiveDate),
    /// Input that could not be read as a date.
    Invalid,
}

impl ExerciseDate {
    /// Rendering of [`ExerciseDate::Invalid`].
    pub const INVALID_LABEL: &'static str = "Invalid Date";

    /// Today's date in the server's local time zone.
    #[must_use]
    pub fn today() -> Self {
        Self::Day(Local::now().date_naive())
    }

    /// Parses caller input, falling back to [`ExerciseDate::Invalid`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        parse_calendar_date(input).map_or(Self::Invalid, Self::Day)
    }

    /// Resolves an optional input: absent or blank means today.
    #[must_use]
    pub fn resolve(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            None | Some("") => Self::today(),
            Some(value) => Self::parse(value),
        }
    }

    /// Returns the calendar day, if valid.
    #[must_use]
    pub const fn day(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(day) => Some(*day),
            Self::Invalid => None,
        }
    }

    /// Returns true unless this is the invalid sentinel.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Day(_))
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "{}", day.format("%a %b %d %Y")),
            Self::Invalid => f.write_str(Self::INVALID_LABEL),
        }
    }
}

impl From<NaiveDate> for ExerciseDate {
    fn from(day: NaiveDate) -> Self {
        if is_storable(day) {
            Self::Day(day)
        } else {
            Self::Invalid
        }
    }
}

impl From<Option<NaiveDate>> for ExerciseDate {
    fn from(day: Option<NaiveDate>) -> Self {
        day.map_or(Self::Invalid, Self::from)
    }
}

/// Returns true if `day` falls within years 0 to 9999.
#[must_use]
pub fn is_storable(day: NaiveDate) -> bool {
    YEAR_RANGE.contains(&day.year())
}

/// Reads a calendar day from caller input.
///
/// Timestamps with an offset are converted to UTC before the day is taken.
/// Signed or expanded years (`+20245-01-01`, `-0001-01-01`) are rejected.
#[must_use]
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.with_timezone(&Utc).date_naive()).filter(|day| is_storable(*day));
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
                .map(|dt| dt.date())
        })
        .filter(|day| is_storable(*day))
}
