//! HTTP tests for user registration and listing.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn test_register_returns_id_and_username() {
    let app = TestApp::new().await;

    let (status, body) = app.post_form("/api/users", "username=fcc_test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "fcc_test");
    assert!(body["_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body.as_object().map(|o| o.len()), Some(2));
}

#[tokio::test]
async fn test_registered_user_is_listed_once() {
    let app = TestApp::new().await;
    let id = app.register("listed").await;

    let (status, body) = app.get("/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("expected an array");
    let matches: Vec<_> = users.iter().filter(|u| u["_id"] == id.as_str()).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["username"], "listed");
}

#[tokio::test]
async fn test_list_users_in_registration_order() {
    let app = TestApp::new().await;
    for name in ["zoe", "adam", "mia"] {
        app.register(name).await;
    }

    let (_, body) = app.get("/api/users").await;
    let names: Vec<&str> = body
        .as_array()
        .expect("expected an array")
        .iter()
        .filter_map(|u| u["username"].as_str())
        .collect();

    assert_eq!(names, vec!["zoe", "adam", "mia"]);
}

#[tokio::test]
async fn test_empty_user_list() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_duplicate_usernames_get_distinct_ids() {
    let app = TestApp::new().await;

    let first = app.register("twin").await;
    let second = app.register("twin").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_missing_username_registers_empty_name() {
    let app = TestApp::new().await;

    let (status, body) = app.post_form("/api/users", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "");
}

#[tokio::test]
async fn test_username_is_url_decoded() {
    let app = TestApp::new().await;

    let (_, body) = app.post_form("/api/users", "username=jane+doe%21").await;

    assert_eq!(body["username"], "jane doe!");
}
