//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitlog_core::{ErrorResponse, FitlogError, FitlogResult};
use serde::Serialize;
use tracing::error;

/// Application error type for Axum.
///
/// Client errors are returned as-is. Server errors are logged and answered
/// with `public_message`, so storage details never reach the caller.
#[derive(Debug)]
pub struct AppError {
    pub error: FitlogError,
    pub public_message: Option<&'static str>,
}

impl AppError {
    /// The "user not found" negative result.
    #[must_use]
    pub fn user_not_found(id: impl ToString) -> Self {
        Self::from(FitlogError::not_found("User", id))
    }
}

impl From<FitlogError> for AppError {
    fn from(error: FitlogError) -> Self {
        Self {
            error,
            public_message: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = ErrorResponse::from_error(&self.error);
        if self.error.is_server_error() {
            let message = self.public_message.unwrap_or("Internal server error");
            error!(error = %self.error, "{}", message);
            body = body.with_message(message);
        }

        (status, Json(body)).into_response()
    }
}

/// Attaches the message returned to callers when a call fails server-side.
pub trait OrFail<T> {
    /// Maps the error into an [`AppError`] carrying `message`.
    fn or_fail(self, message: &'static str) -> Result<T, AppError>;
}

impl<T> OrFail<T> for FitlogResult<T> {
    fn or_fail(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|error| AppError {
            error,
            public_message: Some(message),
        })
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = AppError::user_not_found("abc").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_status() {
        let response = AppError::from(FitlogError::validation("bad")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_or_fail_keeps_client_errors() {
        let result: FitlogResult<()> = Err(FitlogError::validation("limit: 'x' is not an integer"));
        let err = result.or_fail("could not fetch exercise logs").unwrap_err();
        assert!(matches!(err.error, FitlogError::Validation(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_or_fail_masks_server_errors() {
        let result: FitlogResult<()> = Err(FitlogError::Database("disk I/O error".to_string()));
        let err = result.or_fail("Failed to save user").unwrap_err();
        assert_eq!(err.public_message, Some("Failed to save user"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
