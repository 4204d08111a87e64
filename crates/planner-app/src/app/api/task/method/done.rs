//! `POST /api/task/done?id=` - mark a task as done.

use salvo::{Depot, Request, Response, handler, writing::Json};

use planner_service::task;

use crate::app::api::response::{EmptyResponse, parse_task_id, render_error};
use crate::clock::today_from_depot;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// Completes a task: one-off tasks are deleted, recurring tasks move to
/// their next date after today.
///
/// ## Errors
/// Returns HTTP 400 for a missing or malformed id, HTTP 404 for an unknown
/// one.
#[handler]
#[tracing::instrument(skip_all)]
pub async fn complete_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let id = req.query::<String>("id");

    match complete(id.as_deref(), depot).await {
        Ok(()) => res.render(Json(EmptyResponse::default())),
        Err(e) => render_error(res, &e),
    }
}

async fn complete(id: Option<&str>, depot: &Depot) -> AppResult<()> {
    let id = parse_task_id(id)?;
    let today = today_from_depot(depot)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    task::complete_task(&mut conn, id, today).await?;
    Ok(())
}
