//! Filter applied when listing a user's exercise log.

use crate::{coerce_integer, parse_calendar_date, FitlogError, FitlogResult};
use chrono::NaiveDate;

/// Date window and cap for a log query.
///
/// Both bounds are inclusive and independently optional. A `None` limit
/// returns every matching entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Earliest day to include.
    pub from: Option<NaiveDate>,
    /// Latest day to include.
    pub to: Option<NaiveDate>,
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
}

impl LogFilter {
    /// A filter that matches everything.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            from: None,
            to: None,
            limit: None,
        }
    }

    /// Sets the lower bound.
    #[must_use]
    pub const fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub const fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Sets the cap.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builds a filter from raw query parameters.
    ///
    /// Empty strings count as absent. A limit of `0` means no cap and a
    /// negative limit caps at its absolute value.
    pub fn parse(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> FitlogResult<Self> {
        Ok(Self {
            from: parse_bound("from", from)?,
            to: parse_bound("to", to)?,
            limit: parse_limit(limit)?,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bound(name: &str, value: Option<&str>) -> FitlogResult<Option<NaiveDate>> {
    non_empty(value)
        .map(|raw| {
            parse_calendar_date(raw)
                .ok_or_else(|| FitlogError::validation(format!("{name}: '{raw}' is not a valid date")))
        })
        .transpose()
}

fn parse_limit(value: Option<&str>) -> FitlogResult<Option<u32>> {
    let Some(raw) = non_empty(value) else {
        return Ok(None);
    };
    let parsed = coerce_integer(raw)
        .ok_or_else(|| FitlogError::validation(format!("limit: '{raw}' is not an integer")))?;

    Ok(match parsed.unsigned_abs() {
        0 => None,
        n => Some(u32::try_from(n).unwrap_or(u32::MAX)),
    })
}
