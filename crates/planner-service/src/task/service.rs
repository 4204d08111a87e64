use diesel_async::scoped_futures::ScopedFutureExt;

use planner_db::db::connection::DbConnection;
use planner_db::db::query::task as query;
use planner_db::db::transaction::with_transaction;
use planner_db::model::task::{NewTask, Task, TaskChangeset};
use planner_rules::{CalendarDate, compute_next_date};

use super::{TaskFilter, TaskInput, normalize_task};
use crate::error::{ServiceError, ServiceResult};

/// What happened to a task marked as done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCompletion {
    /// One-off task, removed.
    Deleted,
    /// Recurring task, moved to the contained `YYYYMMDD` date.
    Rescheduled(String),
}

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("task {id}"))
}

/// ## Summary
/// Validates and stores a new task.
///
/// ## Errors
/// Returns validation errors from `normalize_task` or database errors.
#[tracing::instrument(skip(conn, input), fields(title = %input.title))]
pub async fn create_task(
    conn: &mut DbConnection<'_>,
    input: &TaskInput,
    today: CalendarDate,
) -> ServiceResult<Task> {
    let task = normalize_task(input, today)?;

    let id = query::insert_task(
        conn,
        &NewTask {
            date: &task.date,
            title: &task.title,
            comment: &task.comment,
            repeat: &task.repeat,
        },
    )
    .await?;

    tracing::info!(id, date = %task.date, "Task created");

    Ok(Task {
        id,
        date: task.date,
        title: task.title,
        comment: task.comment,
        repeat: task.repeat,
    })
}

/// ## Summary
/// Loads one task.
///
/// ## Errors
/// Returns `NotFound` if there is no task with this id.
#[tracing::instrument(skip(conn))]
pub async fn get_task(conn: &mut DbConnection<'_>, id: i64) -> ServiceResult<Task> {
    query::get_task(conn, id).await?.ok_or_else(|| not_found(id))
}

/// ## Summary
/// Lists tasks by due date, narrowed by the search text.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_tasks(
    conn: &mut DbConnection<'_>,
    search: Option<&str>,
    limit: u32,
) -> ServiceResult<Vec<Task>> {
    let tasks = match TaskFilter::from_search(search) {
        TaskFilter::All => query::list_tasks(conn, limit).await?,
        TaskFilter::OnDate(date) => {
            query::list_tasks_on_date(conn, &date.to_string(), limit).await?
        }
        TaskFilter::Text(text) => query::search_tasks(conn, &text, limit).await?,
    };

    tracing::debug!(count = tasks.len(), "Tasks listed");
    Ok(tasks)
}

/// ## Summary
/// Validates and replaces all fields of an existing task.
///
/// ## Errors
/// Returns validation errors, `NotFound` if no task has this id, or database
/// errors.
#[tracing::instrument(skip(conn, input))]
pub async fn update_task(
    conn: &mut DbConnection<'_>,
    id: i64,
    input: &TaskInput,
    today: CalendarDate,
) -> ServiceResult<Task> {
    let task = normalize_task(input, today)?;

    let changed = query::update_task(
        conn,
        id,
        &TaskChangeset {
            date: &task.date,
            title: &task.title,
            comment: &task.comment,
            repeat: &task.repeat,
        },
    )
    .await?;

    if changed == 0 {
        return Err(not_found(id));
    }

    tracing::info!(id, date = %task.date, "Task updated");

    Ok(Task {
        id,
        date: task.date,
        title: task.title,
        comment: task.comment,
        repeat: task.repeat,
    })
}

/// ## Summary
/// Marks a task as done.
///
/// A one-off task is deleted. A recurring task moves to its next occurrence
/// after `today`. The read and the write share one transaction.
///
/// ## Errors
/// Returns `NotFound` if no task has this id, a `RuleError` if the stored
/// date or rule no longer parses, or database errors.
#[tracing::instrument(skip(conn))]
pub async fn complete_task(
    conn: &mut DbConnection<'_>,
    id: i64,
    today: CalendarDate,
) -> ServiceResult<TaskCompletion> {
    let completion = with_transaction(conn, |conn| {
        async move {
            let task = query::get_task(conn, id).await?.ok_or_else(|| not_found(id))?;

            if task.repeat.is_empty() {
                query::delete_task(conn, id).await?;
                return Ok(TaskCompletion::Deleted);
            }

            let next = compute_next_date(today, &task.date, &task.repeat)?;
            query::update_task_date(conn, id, &next).await?;
            Ok::<_, ServiceError>(TaskCompletion::Rescheduled(next))
        }
        .scope_boxed()
    })
    .await?;

    tracing::info!(id, ?completion, "Task completed");
    Ok(completion)
}

/// ## Summary
/// Deletes a task.
///
/// ## Errors
/// Returns `NotFound` if no task has this id, or database errors.
#[tracing::instrument(skip(conn))]
pub async fn delete_task(conn: &mut DbConnection<'_>, id: i64) -> ServiceResult<()> {
    if query::delete_task(conn, id).await? == 0 {
        return Err(not_found(id));
    }

    tracing::info!(id, "Task deleted");
    Ok(())
}
