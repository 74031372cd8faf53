//! SQLite exercise repository implementation.

use super::parse_stored_uuid;
use crate::{traits::ExerciseRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use fitlog_core::{
    is_storable, ExerciseDate, ExerciseEntry, ExerciseId, FitlogError, FitlogResult, LogFilter,
    UserId,
};
use sqlx::{FromRow, QueryBuilder, Sqlite};
use std::sync::Arc;
use tracing::debug;

/// SQLite exercise repository implementation.
#[derive(Clone)]
pub struct SqliteExerciseRepository {
    pool: Arc<DatabasePool>,
}

impl SqliteExerciseRepository {
    /// Creates a new SQLite exercise repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an exercise entry.
#[derive(Debug, FromRow)]
struct ExerciseRow {
    id: String,
    user_id: String,
    description: String,
    duration: i64,
    date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ExerciseRow> for ExerciseEntry {
    type Error = FitlogError;

    fn try_from(row: ExerciseRow) -> Result<Self, Self::Error> {
        Ok(ExerciseEntry {
            id: ExerciseId(parse_stored_uuid(&row.id)?),
            owner_id: UserId::from_uuid(parse_stored_uuid(&row.user_id)?),
            description: row.description,
            duration: row.duration,
            date: ExerciseDate::from(row.date),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ExerciseRepository for SqliteExerciseRepository {
    async fn save(&self, entry: &ExerciseEntry) -> FitlogResult<ExerciseEntry> {
        debug!("Saving exercise {} for user {}", entry.id, entry.owner_id);

        sqlx::query(
            r"
            INSERT INTO exercises (id, user_id, description, duration, date, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(entry.id.to_string())
        .bind(entry.owner_id.to_string())
        .bind(&entry.description)
        .bind(entry.duration)
        // Only fixed-width years compare correctly as text.
        .bind(entry.date.day().filter(|day| is_storable(*day)))
        .bind(entry.created_at)
        .execute(self.pool.inner())
        .await?;

        Ok(entry.clone())
    }

    async fn find_by_owner(
        &self,
        owner_id: UserId,
        filter: &LogFilter,
    ) -> FitlogResult<Vec<ExerciseEntry>> {
        debug!("Finding exercises for user {} with {:?}", owner_id, filter);

        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, user_id, description, duration, date, created_at FROM exercises WHERE user_id = ",
        );
        query.push_bind(owner_id.to_string());

        // NULL dates fall out of either comparison.
        if let Some(from) = filter.from {
            query.push(" AND date >= ").push_bind(from);
        }
        if let Some(to) = filter.to {
            query.push(" AND date <= ").push_bind(to);
        }

        query.push(" ORDER BY seq");

        if let Some(limit) = filter.limit {
            query.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let rows = query
            .build_query_as::<ExerciseRow>()
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(ExerciseEntry::try_from).collect()
    }
}
