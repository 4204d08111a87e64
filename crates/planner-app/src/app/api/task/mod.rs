//! Single-task endpoints under `/api/task`.

use salvo::Router;

use super::TASK_ROUTE_COMPONENT;

pub mod method;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(TASK_ROUTE_COMPONENT)
        .get(method::get::get_task)
        .post(method::post::create_task)
        .put(method::put::update_task)
        .delete(method::delete::delete_task)
        .push(Router::with_path("done").post(method::done::complete_task))
}
