//! Exercise service trait definition.

use crate::dto::{AddExerciseRequest, ExerciseLogResponse, ExerciseResponse, LogQueryRequest};
use async_trait::async_trait;
use fitlog_core::{FitlogResult, UserId};

/// Exercise log service trait.
///
/// Both operations return `Ok(None)` when the owner does not exist.
#[async_trait]
pub trait ExerciseService: Send + Sync {
    /// Appends an exercise to the owner's log.
    async fn add_exercise(
        &self,
        owner_id: UserId,
        request: AddExerciseRequest,
    ) -> FitlogResult<Option<ExerciseResponse>>;

    /// Reads the owner's log, filtered by date window and capped by limit.
    async fn get_log(
        &self,
        owner_id: UserId,
        query: LogQueryRequest,
    ) -> FitlogResult<Option<ExerciseLogResponse>>;
}
