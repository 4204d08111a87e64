//! `PUT /api/task` - replace a task.

use salvo::{Depot, Request, Response, handler, writing::Json};
use serde::Deserialize;

use planner_service::task::{self, TaskInput};

use crate::app::api::response::{EmptyResponse, parse_task_id, render_error};
use crate::clock::today_from_depot;
use crate::db_handler::get_db_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Update request payload: the task id plus every editable field.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub task: TaskInput,
}

/// ## Summary
/// Replaces all fields of an existing task. The date is normalised the same
/// way as on creation.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body, id, date or rule; HTTP 404 for an
/// unknown id.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn update_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match update(req, depot).await {
        Ok(()) => res.render(Json(EmptyResponse::default())),
        Err(e) => render_error(res, &e),
    }
}

async fn update(req: &mut Request, depot: &Depot) -> AppResult<()> {
    let request: UpdateTaskRequest = req.parse_json().await.map_err(|e| {
        tracing::debug!(error = ?e, "Failed to parse task body");
        AppError::BadRequest("invalid task body".to_string())
    })?;

    let id = parse_task_id(Some(&request.id))?;
    let today = today_from_depot(depot)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    task::update_task(&mut conn, id, &request.task, today).await?;
    Ok(())
}
