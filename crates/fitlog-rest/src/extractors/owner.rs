//! Owner id path extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use fitlog_core::{FitlogError, UserId};
use tracing::debug;

/// The `:id` path segment of a user-scoped route.
///
/// No user can carry an id that is not a UUID, so a malformed segment is
/// rejected with the same 404 as an unknown user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerId(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for OwnerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(FitlogError::internal(e.body_text())))?;

        UserId::parse(&raw).map(OwnerId).map_err(|_| {
            debug!("Malformed user id in path: {}", raw);
            AppError::user_not_found(raw)
        })
    }
}
