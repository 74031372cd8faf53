//! Url-encoded form extractor with JSON rejections.
//!
//! `FormBody<T>` only decodes the body. Field rules are checked by the
//! services, after the owner of a user-scoped route has been looked up.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use fitlog_core::ErrorResponse;
use serde::de::DeserializeOwned;

/// Form extractor answering undecodable bodies with an [`ErrorResponse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormBody<T>(pub T);

impl<T> std::ops::Deref for FormBody<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection for a body that is not a decodable form.
#[derive(Debug)]
pub struct FormBodyRejection(pub FormRejection);

impl IntoResponse for FormBodyRejection {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: format!("Invalid form body: {}", self.0.body_text()),
            code: "INVALID_FORM".to_string(),
            details: None,
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = FormBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(FormBodyRejection)?;
        Ok(FormBody(value))
    }
}
