//! Common test infrastructure for HTTP integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use fitlog_config::ServerConfig;
use fitlog_repository::{DatabasePool, SqliteExerciseRepository, SqliteUserRepository};
use fitlog_rest::{create_router, AppState};
use fitlog_service::{ExerciseServiceImpl, UserServiceImpl};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Full application router over a private in-memory database.
pub struct TestApp {
    router: Router,
    pool: Arc<DatabasePool>,
}

impl TestApp {
    /// Builds the app with migrated, empty storage.
    pub async fn new() -> Self {
        let pool = Arc::new(
            DatabasePool::in_memory()
                .await
                .expect("Failed to open in-memory database"),
        );

        let users = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
        let exercises = Arc::new(SqliteExerciseRepository::new(Arc::clone(&pool)));

        let state = AppState::new(
            Arc::new(UserServiceImpl::new(Arc::clone(&users))),
            Arc::new(ExerciseServiceImpl::new(users, exercises)),
        )
        .with_health_check(pool.clone());

        Self {
            router: create_router(state, &ServerConfig::default()),
            pool,
        }
    }

    /// Builds the app around an existing state.
    pub fn with_state(state: AppState, pool: Arc<DatabasePool>) -> Self {
        Self {
            router: create_router(state, &ServerConfig::default()),
            pool,
        }
    }

    /// Returns the backing pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Sends a url-encoded form.
    pub async fn post_form(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Sends a GET request.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Sends a GET request and returns the raw body text.
    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Registers a user and returns its id.
    pub async fn register(&self, username: &str) -> String {
        let (status, body) = self.post_form("/api/users", &format!("username={username}")).await;
        assert_eq!(status, StatusCode::OK);
        body["_id"].as_str().expect("missing _id").to_string()
    }

    /// Appends an exercise and asserts success.
    pub async fn add_exercise(&self, user_id: &str, form: &str) -> Value {
        let (status, body) = self
            .post_form(&format!("/api/users/{user_id}/exercises"), form)
            .await;
        assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
        body
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }
}
