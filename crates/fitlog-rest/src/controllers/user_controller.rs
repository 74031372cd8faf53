//! User registry controller.

use crate::{
    extractors::FormBody,
    responses::{ok, ApiResult, OrFail},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use fitlog_core::ErrorResponse;
use fitlog_service::{CreateUserRequest, UserResponse};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body(content = CreateUserRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "User registered", body = UserResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    FormBody(request): FormBody<CreateUserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Create user request: {}", request.username);

    let response = state
        .user_service
        .register(request)
        .await
        .or_fail("Failed to save user")?;
    ok(response)
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users in registration order", body = Vec<UserResponse>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let response = state
        .user_service
        .list_users()
        .await
        .or_fail("Failed to fetch users")?;
    ok(response)
}
