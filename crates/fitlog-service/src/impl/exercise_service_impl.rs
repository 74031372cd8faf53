//! Exercise service implementation.

use crate::dto::{AddExerciseRequest, ExerciseLogResponse, ExerciseResponse, LogQueryRequest};
use crate::exercise_service::ExerciseService;
use crate::mappers::to_log_response;
use async_trait::async_trait;
use fitlog_core::{
    coerce_integer, ExerciseDate, ExerciseEntry, FitlogError, FitlogResult, LogFilter, UserId,
    ValidateExt,
};
use fitlog_repository::{ExerciseRepository, UserRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Exercise service implementation.
pub struct ExerciseServiceImpl<U: UserRepository, E: ExerciseRepository> {
    user_repository: Arc<U>,
    exercise_repository: Arc<E>,
}

impl<U: UserRepository, E: ExerciseRepository> ExerciseServiceImpl<U, E> {
    /// Creates a new exercise service.
    pub fn new(user_repository: Arc<U>, exercise_repository: Arc<E>) -> Self {
        Self {
            user_repository,
            exercise_repository,
        }
    }
}

#[async_trait]
impl<U, E> ExerciseService for ExerciseServiceImpl<U, E>
where
    U: UserRepository + 'static,
    E: ExerciseRepository + 'static,
{
    async fn add_exercise(
        &self,
        owner_id: UserId,
        request: AddExerciseRequest,
    ) -> FitlogResult<Option<ExerciseResponse>> {
        debug!("Adding exercise for user: {}", owner_id);

        let Some(owner) = self.user_repository.find_by_id(owner_id).await? else {
            debug!("Owner not found: {}", owner_id);
            return Ok(None);
        };

        request.validate_request()?;
        let AddExerciseRequest {
            description,
            duration,
            date,
        } = request;

        let raw_duration = duration.unwrap_or_default();
        let duration = coerce_integer(&raw_duration).ok_or_else(|| {
            FitlogError::validation(format!("duration: '{raw_duration}' is not an integer"))
        })?;

        let entry = ExerciseEntry::new(
            owner.id,
            description.unwrap_or_default(),
            duration,
            ExerciseDate::resolve(date.as_deref()),
        );
        let saved = self.exercise_repository.save(&entry).await?;

        info!("Exercise {} logged for user {}", saved.id, owner.id);
        Ok(Some(ExerciseResponse::new(&owner, &saved)))
    }

    async fn get_log(
        &self,
        owner_id: UserId,
        query: LogQueryRequest,
    ) -> FitlogResult<Option<ExerciseLogResponse>> {
        debug!("Getting log for user: {} ({:?})", owner_id, query);

        let Some(owner) = self.user_repository.find_by_id(owner_id).await? else {
            debug!("Owner not found: {}", owner_id);
            return Ok(None);
        };

        let filter = LogFilter::parse(
            query.from.as_deref(),
            query.to.as_deref(),
            query.limit.as_deref(),
        )?;
        let entries = self
            .exercise_repository
            .find_by_owner(owner.id, &filter)
            .await?;

        Ok(Some(to_log_response(&owner, entries)))
    }
}

impl<U: UserRepository, E: ExerciseRepository> std::fmt::Debug for ExerciseServiceImpl<U, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExerciseServiceImpl").finish_non_exhaustive()
    }
}
