//! `POST /api/task` - create a task.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler, writing::Json};

use planner_service::task::{self, TaskInput};

use crate::app::api::response::{TaskResponse, render_error};
use crate::clock::today_from_depot;
use crate::db_handler::get_db_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Creates a task from a JSON body of `date`, `title`, `comment` and `repeat`.
///
/// An empty date means today. A past date moves to today, or to the next
/// occurrence after today when a repeat rule is given.
///
/// ## Side Effects
/// Inserts one row into the task table.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body, a blank title, a bad date or rule;
/// HTTP 503 if no database connection is available; HTTP 500 otherwise.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn create_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match create(req, depot).await {
        Ok(task) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(task));
        }
        Err(e) => render_error(res, &e),
    }
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<TaskResponse> {
    let input: TaskInput = req.parse_json().await.map_err(|e| {
        tracing::debug!(error = ?e, "Failed to parse task body");
        AppError::BadRequest("invalid task body".to_string())
    })?;

    let today = today_from_depot(depot)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let created = task::create_task(&mut conn, &input, today).await?;
    Ok(created.into())
}
