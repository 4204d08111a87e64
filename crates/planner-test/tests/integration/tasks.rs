#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Tests for `GET /api/tasks`.

use salvo::http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::helpers::{TaskResponse, TestApp};

#[derive(Debug, Deserialize)]
struct TaskList {
    tasks: Vec<TaskResponse>,
}

async fn titles(app: &TestApp, path: &str) -> Vec<String> {
    app.get(path)
        .await
        .assert_status(StatusCode::OK)
        .json::<TaskList>()
        .tasks
        .into_iter()
        .map(|task| task.title)
        .collect()
}

async fn seed(app: &TestApp) {
    for (date, title, comment) in [
        ("20240301", "Pay rent", ""),
        ("20240201", "Gym", "leg day"),
        ("20240201", "Dentist", "checkup"),
        ("20240120", "Call mum", "about the GYM bag"),
    ] {
        app.create_task(json!({ "date": date, "title": title, "comment": comment }))
            .await;
    }
}

#[test_log::test(tokio::test)]
async fn test_list_is_empty_without_tasks() {
    let app = TestApp::new().await;

    let response = app.get("/api/tasks").await.assert_status(StatusCode::OK);
    assert_eq!(response.body, r#"{"tasks":[]}"#);
}

#[test_log::test(tokio::test)]
async fn test_list_orders_by_date_then_id() {
    let app = TestApp::new().await;
    seed(&app).await;

    assert_eq!(
        titles(&app, "/api/tasks").await,
        ["Call mum", "Gym", "Dentist", "Pay rent"]
    );
}

#[test_log::test(tokio::test)]
async fn test_search_by_date() {
    let app = TestApp::new().await;
    seed(&app).await;

    assert_eq!(
        titles(&app, "/api/tasks?search=01.02.2024").await,
        ["Gym", "Dentist"]
    );
    assert!(titles(&app, "/api/tasks?search=02.02.2024").await.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_search_by_text() {
    let app = TestApp::new().await;
    seed(&app).await;

    assert_eq!(
        titles(&app, "/api/tasks?search=gym").await,
        ["Call mum", "Gym"]
    );
    assert_eq!(
        titles(&app, "/api/tasks?search=check").await,
        ["Dentist"]
    );
    assert!(titles(&app, "/api/tasks?search=holiday").await.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_search_treats_wildcards_literally() {
    let app = TestApp::new().await;
    for title in ["100% done", "1000 done", "under_score", "underscore"] {
        app.create_task(json!({ "date": "20240201", "title": title }))
            .await;
    }

    assert_eq!(
        titles(&app, "/api/tasks?search=100%25").await,
        ["100% done"]
    );
    assert_eq!(
        titles(&app, "/api/tasks?search=under_").await,
        ["under_score"]
    );
}

#[test_log::test(tokio::test)]
async fn test_list_respects_configured_limit() {
    let app = TestApp::with_list_limit(2).await;
    seed(&app).await;

    assert_eq!(titles(&app, "/api/tasks").await, ["Call mum", "Gym"]);
    assert_eq!(
        titles(&app, "/api/tasks?search=gym").await,
        ["Call mum", "Gym"]
    );
}
