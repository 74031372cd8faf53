//! Exercise-related DTOs.

use fitlog_core::{ExerciseEntry, User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request to append an exercise entry.
///
/// Fields arrive as raw form text; `duration` is coerced to an integer and
/// `date` is parsed leniently by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddExerciseRequest {
    #[validate(required(message = "description is required"))]
    pub description: Option<String>,

    #[validate(required(message = "duration is required"))]
    #[schema(example = "30")]
    pub duration: Option<String>,

    #[schema(example = "2024-01-31")]
    pub date: Option<String>,
}

impl AddExerciseRequest {
    /// Creates a request without a date.
    #[must_use]
    pub fn new(description: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            duration: Some(duration.into()),
            date: None,
        }
    }

    /// Sets the date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Response for a stored exercise, echoing the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: UserId,
    pub username: String,
    #[schema(example = "Mon Jan 01 2024")]
    pub date: String,
    pub duration: i64,
    pub description: String,
}

impl ExerciseResponse {
    /// Builds the response for `entry` appended to `owner`'s log.
    #[must_use]
    pub fn new(owner: &User, entry: &ExerciseEntry) -> Self {
        Self {
            id: owner.id,
            username: owner.username.clone(),
            date: entry.date.to_string(),
            duration: entry.duration,
            description: entry.description.clone(),
        }
    }
}

/// Query parameters for reading a log.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQueryRequest {
    /// Earliest date to include (inclusive).
    pub from: Option<String>,
    /// Latest date to include (inclusive).
    pub to: Option<String>,
    /// Maximum number of entries; omitted or `0` returns all.
    pub limit: Option<String>,
}

/// One entry in a log response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogEntry {
    pub description: String,
    pub duration: i64,
    #[schema(example = "Mon Jan 01 2024")]
    pub date: String,
}

impl From<ExerciseEntry> for ExerciseLogEntry {
    fn from(entry: ExerciseEntry) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration,
            date: entry.date.to_string(),
        }
    }
}

/// A user's exercise log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogResponse {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: UserId,
    pub username: String,
    pub count: usize,
    pub log: Vec<ExerciseLogEntry>,
}
