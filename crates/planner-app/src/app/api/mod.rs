mod app_specific;
mod next_date;
pub mod response;
pub mod task;
mod tasks;

use salvo::Router;

pub use planner_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, NEXT_DATE_ROUTE_COMPONENT, NEXT_DATE_ROUTE_PREFIX,
    TASK_ROUTE_COMPONENT, TASK_ROUTE_PREFIX, TASKS_ROUTE_COMPONENT, TASKS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router with all task handlers.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(next_date::routes())
        .push(task::routes())
        .push(tasks::routes())
}
