//! Shared response bodies and error rendering.

use salvo::http::StatusCode;
use salvo::{Response, writing::Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use planner_db::model::task::Task;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Empty object returned by operations with nothing to report.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EmptyResponse {}

/// ## Summary
/// Task as sent to clients. Ids travel as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: String,
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            date: task.date,
            title: task.title,
            comment: task.comment,
            repeat: task.repeat,
        }
    }
}

/// ## Summary
/// Parses a task id from a query parameter or request body.
///
/// ## Errors
/// Returns `BadRequest` if the id is missing, blank or not an integer.
pub fn parse_task_id(id: Option<&str>) -> AppResult<i64> {
    let id = id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("task id is required".to_string()))?;

    id.parse()
        .map_err(|_err| AppError::BadRequest(format!("invalid task id: {id:?}")))
}

/// ## Summary
/// Writes `err` as a JSON error body with its mapped status code.
///
/// Server-side failures are logged in full and reported with a generic
/// message; client errors carry their own message.
pub fn render_error(res: &mut Response, err: &AppError) {
    let status = err.status_code();

    let message = if status.is_server_error() {
        tracing::error!(error = ?err, "Request failed");
        if status == StatusCode::SERVICE_UNAVAILABLE {
            "Database unavailable".to_string()
        } else {
            "Internal server error".to_string()
        }
    } else {
        tracing::debug!(error = %err, "Request rejected");
        err.to_string()
    };

    res.status_code(status);
    res.render(Json(ErrorResponse { error: message }));
}
