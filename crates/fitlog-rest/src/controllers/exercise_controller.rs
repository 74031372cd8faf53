//! Exercise log controller.

use crate::{
    extractors::{FormBody, OwnerId},
    responses::{ok, ApiResult, AppError, OrFail},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Router,
};
use fitlog_core::ErrorResponse;
use fitlog_service::{AddExerciseRequest, ExerciseLogResponse, ExerciseResponse, LogQueryRequest};
use tracing::debug;

/// Creates the exercise router, nested under `/api/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id/exercises", post(add_exercise))
        .route("/:id/logs", get(get_log))
}

/// Append an exercise to a user's log.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    tag = "exercises",
    params(("id" = String, Path, description = "User id")),
    request_body(content = AddExerciseRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Exercise stored", body = ExerciseResponse),
        (status = 400, description = "Missing field or non-numeric duration", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn add_exercise(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    FormBody(request): FormBody<AddExerciseRequest>,
) -> ApiResult<ExerciseResponse> {
    debug!("Add exercise request for user: {}", owner_id);

    let response = state
        .exercise_service
        .add_exercise(owner_id, request)
        .await
        .or_fail("Could not post exercises")?
        .ok_or_else(|| AppError::user_not_found(owner_id))?;
    ok(response)
}

/// Read a user's exercise log.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    tag = "exercises",
    params(("id" = String, Path, description = "User id"), LogQueryRequest),
    responses(
        (status = 200, description = "Filtered log", body = ExerciseLogResponse),
        (status = 400, description = "Unparseable from, to or limit", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_log(
    State(state): State<AppState>,
    OwnerId(owner_id): OwnerId,
    Query(query): Query<LogQueryRequest>,
) -> ApiResult<ExerciseLogResponse> {
    debug!("Get log request for user: {} ({:?})", owner_id, query);

    let response = state
        .exercise_service
        .get_log(owner_id, query)
        .await
        .or_fail("could not fetch exercise logs")?
        .ok_or_else(|| AppError::user_not_found(owner_id))?;
    ok(response)
}
