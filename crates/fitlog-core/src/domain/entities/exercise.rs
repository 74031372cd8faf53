//! Exercise entry entity.

use crate::{ExerciseDate, ExerciseId, UserId};
use chrono::{DateTime, Utc};

/// A single logged exercise. Entries are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    /// Unique identifier for the entry.
    pub id: ExerciseId,

    /// Owning user. Not enforced by the store.
    pub owner_id: UserId,

    /// Free-text description, possibly empty.
    pub description: String,

    /// Duration in minutes. Zero and negative values are kept as given.
    pub duration: i64,

    /// Day the exercise happened.
    pub date: ExerciseDate,

    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

impl ExerciseEntry {
    /// Creates a new entry with a freshly assigned ID.
    #[must_use]
    pub fn new(
        owner_id: UserId,
        description: impl Into<String>,
        duration: i64,
        date: ExerciseDate,
    ) -> Self {
        Self {
            id: ExerciseId::new(),
            owner_id,
            description: description.into(),
            duration,
            date,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_entry_keeps_values_verbatim() {
        let owner = UserId::new();
        let date = ExerciseDate::Day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let entry = ExerciseEntry::new(owner, "", -5, date);

        assert_eq!(entry.owner_id, owner);
        assert_eq!(entry.description, "");
        assert_eq!(entry.duration, -5);
        assert_eq!(entry.date, date);
    }
}
