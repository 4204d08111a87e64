//! `GET /api/task?id=` - fetch one task.

use salvo::{Depot, Request, Response, handler, writing::Json};

use planner_service::task;

use crate::app::api::response::{TaskResponse, parse_task_id, render_error};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// Returns the task named by the `id` query parameter.
///
/// ## Errors
/// Returns HTTP 400 for a missing or malformed id and HTTP 404 for an
/// unknown one.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn get_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let id = req.query::<String>("id");

    match fetch(id.as_deref(), depot).await {
        Ok(task) => res.render(Json(task)),
        Err(e) => render_error(res, &e),
    }
}

async fn fetch(id: Option<&str>, depot: &Depot) -> AppResult<TaskResponse> {
    let id = parse_task_id(id)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(task::get_task(&mut conn, id).await?.into())
}
