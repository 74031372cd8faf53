//! HTTP tests for reading exercise logs.

mod common;

use axum::http::StatusCode;
use common::TestApp;

async fn seeded(dates: &[&str]) -> (TestApp, String) {
    let app = TestApp::new().await;
    let id = app.register("logger").await;
    for date in dates {
        app.add_exercise(&id, &format!("description={date}&duration=10&date={date}"))
            .await;
    }
    (app, id)
}

fn descriptions(body: &serde_json::Value) -> Vec<String> {
    body["log"]
        .as_array()
        .expect("expected a log array")
        .iter()
        .filter_map(|e| e["description"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_log_shape() {
    let (app, id) = seeded(&["2024-03-15"]).await;

    let (status, body) = app.get(&format!("/api/users/{id}/logs")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_id"], id.as_str());
    assert_eq!(body["username"], "logger");
    assert_eq!(body["count"], 1);
    assert_eq!(
        body["log"][0],
        serde_json::json!({
            "description": "2024-03-15",
            "duration": 10,
            "date": "Fri Mar 15 2024"
        })
    );
}

#[tokio::test]
async fn test_log_keeps_insertion_order() {
    let (app, id) = seeded(&["2024-05-01", "2024-01-01", "2024-03-01"]).await;

    let (_, body) = app.get(&format!("/api/users/{id}/logs")).await;

    assert_eq!(descriptions(&body), vec!["2024-05-01", "2024-01-01", "2024-03-01"]);
}

#[tokio::test]
async fn test_date_window_is_inclusive() {
    let (app, id) = seeded(&[
        "2023-12-31",
        "2024-01-01",
        "2024-01-15",
        "2024-01-31",
        "2024-02-01",
    ])
    .await;

    let (status, body) = app
        .get(&format!("/api/users/{id}/logs?from=2024-01-01&to=2024-01-31"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(
        descriptions(&body),
        vec!["2024-01-01", "2024-01-15", "2024-01-31"]
    );
}

#[tokio::test]
async fn test_open_ended_bounds() {
    let (app, id) = seeded(&["2023-06-01", "2024-06-01"]).await;

    let (_, from_only) = app.get(&format!("/api/users/{id}/logs?from=2024-01-01")).await;
    assert_eq!(descriptions(&from_only), vec!["2024-06-01"]);

    let (_, to_only) = app.get(&format!("/api/users/{id}/logs?to=2024-01-01")).await;
    assert_eq!(descriptions(&to_only), vec!["2023-06-01"]);
}

#[tokio::test]
async fn test_limit_caps_entries_and_count() {
    let (app, id) = seeded(&["2024-01-01", "2024-01-02"]).await;

    let (_, body) = app.get(&format!("/api/users/{id}/logs?limit=1")).await;

    assert_eq!(body["count"], 1);
    assert_eq!(descriptions(&body), vec!["2024-01-01"]);
}

#[tokio::test]
async fn test_limit_edge_values() {
    let (app, id) = seeded(&["2024-01-01", "2024-01-02", "2024-01-03"]).await;

    let (_, zero) = app.get(&format!("/api/users/{id}/logs?limit=0")).await;
    assert_eq!(zero["count"], 3);

    let (_, negative) = app.get(&format!("/api/users/{id}/logs?limit=-2")).await;
    assert_eq!(negative["count"], 2);

    let (_, empty) = app.get(&format!("/api/users/{id}/logs?limit=")).await;
    assert_eq!(empty["count"], 3);
}

#[tokio::test]
async fn test_limit_applies_after_window() {
    let (app, id) = seeded(&["2023-01-01", "2024-01-01", "2024-01-02", "2024-01-03"]).await;

    let (_, body) = app
        .get(&format!("/api/users/{id}/logs?from=2024-01-01&limit=2"))
        .await;

    assert_eq!(descriptions(&body), vec!["2024-01-01", "2024-01-02"]);
}

#[tokio::test]
async fn test_logs_are_scoped_to_user() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    app.add_exercise(&alice, "description=swim&duration=20").await;

    let (_, body) = app.get(&format!("/api/users/{bob}/logs")).await;

    assert_eq!(body["count"], 0);
    assert_eq!(body["log"], serde_json::json!([]));
}

#[tokio::test]
async fn test_bad_query_values_are_rejected() {
    let (app, id) = seeded(&["2024-01-01"]).await;

    for query in [
        "from=someday",
        "to=never",
        "limit=many",
        "to=%2B20245-01-01",
        "from=-0001-01-01",
    ] {
        let (status, body) = app.get(&format!("/api/users/{id}/logs?{query}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "query {query}");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_unknown_user_log_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .get("/api/users/01929c3e-7a4b-7c1d-9e2f-3a4b5c6d7e8f/logs")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}
