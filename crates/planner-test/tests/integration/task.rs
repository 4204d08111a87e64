#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Tests for the single-task endpoints under `/api/task`.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::{TODAY, TaskResponse, TestApp};

async fn fetch(app: &TestApp, id: &str) -> TaskResponse {
    app.get(&format!("/api/task?id={id}"))
        .await
        .assert_status(StatusCode::OK)
        .json()
}

#[test_log::test(tokio::test)]
async fn test_create_and_get_task() {
    let app = TestApp::new().await;

    let created: TaskResponse = app
        .post_json(
            "/api/task",
            &json!({
                "date": "20240201",
                "title": "Dentist",
                "comment": "bring the card",
                "repeat": ""
            }),
        )
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert!(!created.id.is_empty());
    assert_eq!(created.date, "20240201");

    let fetched = fetch(&app, &created.id).await;
    assert_eq!(fetched, created);
    assert_eq!(fetched.comment, "bring the card");
}

#[test_log::test(tokio::test)]
async fn test_create_normalises_date() {
    let app = TestApp::new().await;

    for (date, repeat, expected) in [
        ("", "", TODAY),
        ("20240101", "", TODAY),
        ("20240101", "d 7", "20240122"),
        ("20230115", "y", "20250115"),
        (TODAY, "d 3", TODAY),
        ("20240301", "y", "20240301"),
    ] {
        let id = app
            .create_task(json!({ "date": date, "title": "Task", "repeat": repeat }))
            .await;
        assert_eq!(fetch(&app, &id).await.date, expected, "{date} {repeat}");
    }
}

#[test_log::test(tokio::test)]
async fn test_create_rejects_invalid_input() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/task", &json!({ "date": "20240201", "title": "  " }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("title"));

    for body in [
        json!({ "date": "2024-02-01", "title": "Task" }),
        json!({ "date": "20240230", "title": "Task" }),
        json!({ "date": "20240201", "title": "Task", "repeat": "w 1" }),
        json!({ "date": "20240201", "title": "Task", "repeat": "d" }),
        json!({ "date": "20240201", "title": "Task", "repeat": "d 0" }),
    ] {
        app.post_json("/api/task", &body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    app.post_raw_json("/api/task", "{not json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let tasks = app.get("/api/tasks").await.assert_status(StatusCode::OK);
    assert_eq!(tasks.body, r#"{"tasks":[]}"#);
}

#[test_log::test(tokio::test)]
async fn test_get_task_errors() {
    let app = TestApp::new().await;

    app.get("/api/task")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.get("/api/task?id=abc")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    let response = app
        .get("/api/task?id=999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert!(response.error_message().contains("999"));
}

#[test_log::test(tokio::test)]
async fn test_update_task() {
    let app = TestApp::new().await;
    let id = app
        .create_task(json!({ "date": "20240201", "title": "Draft" }))
        .await;

    let response = app
        .put_json(
            "/api/task",
            &json!({
                "id": id,
                "date": "20240110",
                "title": "Final",
                "comment": "moved",
                "repeat": "d 10"
            }),
        )
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.body, "{}");

    let task = fetch(&app, &id).await;
    assert_eq!(task.title, "Final");
    assert_eq!(task.comment, "moved");
    assert_eq!(task.repeat, "d 10");
    assert_eq!(task.date, "20240120");
}

#[test_log::test(tokio::test)]
async fn test_update_task_errors() {
    let app = TestApp::new().await;
    let id = app
        .create_task(json!({ "date": "20240201", "title": "Keep" }))
        .await;

    app.put_json("/api/task", &json!({ "id": "999", "title": "Ghost" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.put_json("/api/task", &json!({ "title": "No id" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.put_json("/api/task", &json!({ "id": id, "title": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(fetch(&app, &id).await.title, "Keep");
}

#[test_log::test(tokio::test)]
async fn test_delete_task() {
    let app = TestApp::new().await;
    let id = app
        .create_task(json!({ "date": "20240201", "title": "Remove me" }))
        .await;

    let response = app
        .delete(&format!("/api/task?id={id}"))
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.body, "{}");

    app.get(&format!("/api/task?id={id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.delete(&format!("/api/task?id={id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.delete("/api/task")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn test_done_deletes_one_off_task() {
    let app = TestApp::new().await;
    let id = app
        .create_task(json!({ "date": "20240201", "title": "Once" }))
        .await;

    let response = app
        .post_json(&format!("/api/task/done?id={id}"), &json!({}))
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.body, "{}");

    app.get(&format!("/api/task?id={id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_done_reschedules_recurring_task() {
    let app = TestApp::new().await;

    for (date, repeat, expected) in [
        (TODAY, "d 3", "20240118"),
        ("20240120", "d 3", "20240123"),
        ("20240229", "y", "20250301"),
    ] {
        let id = app
            .create_task(json!({ "date": date, "title": "Again", "repeat": repeat }))
            .await;

        app.post_json(&format!("/api/task/done?id={id}"), &json!({}))
            .await
            .assert_status(StatusCode::OK);

        let task = fetch(&app, &id).await;
        assert_eq!(task.date, expected, "{date} {repeat}");
        assert_eq!(task.repeat, repeat);
    }
}

#[test_log::test(tokio::test)]
async fn test_done_errors() {
    let app = TestApp::new().await;

    app.post_json("/api/task/done?id=999", &json!({}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.post_json("/api/task/done?id=x", &json!({}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
