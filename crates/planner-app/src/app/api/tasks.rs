//! `GET /api/tasks` - list and search tasks.

use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::{Deserialize, Serialize};

use planner_service::task;

use super::TASKS_ROUTE_COMPONENT;
use super::response::{TaskResponse, render_error};
use crate::config::get_config_from_depot;
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;

/// ## Summary
/// Task list payload
#[derive(Debug, Serialize, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<TaskResponse>,
}

/// ## Summary
/// Lists upcoming tasks by date. The optional `search` parameter narrows the
/// list to one `DD.MM.YYYY` date or to tasks whose title or comment contains
/// the text.
///
/// ## Errors
/// Returns HTTP 503 if no database connection is available, HTTP 500 for
/// other failures.
#[handler]
#[tracing::instrument(skip_all)]
async fn list_tasks(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let search = req.query::<String>("search");

    match list(search.as_deref(), depot).await {
        Ok(tasks) => res.render(Json(tasks)),
        Err(e) => render_error(res, &e),
    }
}

async fn list(search: Option<&str>, depot: &Depot) -> AppResult<TasksResponse> {
    let settings = get_config_from_depot(depot)?;
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let tasks = task::list_tasks(&mut conn, search, settings.tasks.list_limit).await?;
    Ok(TasksResponse {
        tasks: tasks.into_iter().map(TaskResponse::from).collect(),
    })
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(TASKS_ROUTE_COMPONENT).get(list_tasks)
}
