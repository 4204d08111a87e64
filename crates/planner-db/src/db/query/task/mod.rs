//! Task queries.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::scheduler;
use crate::error::DbResult;
use crate::model::task::{NewTask, Task, TaskChangeset};

/// Escape character used in `LIKE` patterns.
const LIKE_ESCAPE: char = '\\';

/// ## Summary
/// Inserts a task and returns its generated id.
///
/// ## Errors
/// Returns database errors if the insert fails.
#[tracing::instrument(skip(conn))]
pub async fn insert_task(conn: &mut DbConnection<'_>, task: &NewTask<'_>) -> DbResult<i64> {
    let id = diesel::insert_into(scheduler::table)
        .values(task)
        .returning(scheduler::id)
        .get_result::<i64>(conn)
        .await?;

    tracing::debug!(id, "Task inserted");
    Ok(id)
}

/// ## Summary
/// Loads a task by id.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get_task(conn: &mut DbConnection<'_>, id: i64) -> DbResult<Option<Task>> {
    Ok(scheduler::table
        .find(id)
        .select(Task::as_select())
        .first::<Task>(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Lists tasks ordered by due date, then id.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_tasks(conn: &mut DbConnection<'_>, limit: u32) -> DbResult<Vec<Task>> {
    Ok(scheduler::table
        .order((scheduler::date.asc(), scheduler::id.asc()))
        .limit(i64::from(limit))
        .select(Task::as_select())
        .load::<Task>(conn)
        .await?)
}

/// ## Summary
/// Lists tasks due on `date` (`YYYYMMDD`).
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list_tasks_on_date(
    conn: &mut DbConnection<'_>,
    date: &str,
    limit: u32,
) -> DbResult<Vec<Task>> {
    Ok(scheduler::table
        .filter(scheduler::date.eq(date))
        .order(scheduler::id.asc())
        .limit(i64::from(limit))
        .select(Task::as_select())
        .load::<Task>(conn)
        .await?)
}

/// ## Summary
/// Lists tasks whose title or comment contains `needle`.
///
/// `%` and `_` in the needle match literally. Matching follows SQLite `LIKE`,
/// which ignores ASCII case.
///
/// ## Errors
/// Returns database errors if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn search_tasks(
    conn: &mut DbConnection<'_>,
    needle: &str,
    limit: u32,
) -> DbResult<Vec<Task>> {
    let pattern = build_like_pattern(needle);

    Ok(scheduler::table
        .filter(
            scheduler::title
                .like(&pattern)
                .escape(LIKE_ESCAPE)
                .or(scheduler::comment.like(&pattern).escape(LIKE_ESCAPE)),
        )
        .order((scheduler::date.asc(), scheduler::id.asc()))
        .limit(i64::from(limit))
        .select(Task::as_select())
        .load::<Task>(conn)
        .await?)
}

/// ## Summary
/// Replaces every editable field of a task.
///
/// Returns the number of rows changed (0 when the id does not exist).
///
/// ## Errors
/// Returns database errors if the update fails.
#[tracing::instrument(skip(conn))]
pub async fn update_task(
    conn: &mut DbConnection<'_>,
    id: i64,
    changes: &TaskChangeset<'_>,
) -> DbResult<usize> {
    Ok(diesel::update(scheduler::table.find(id))
        .set(changes)
        .execute(conn)
        .await?)
}

/// ## Summary
/// Moves a task to a new due date.
///
/// ## Errors
/// Returns database errors if the update fails.
#[tracing::instrument(skip(conn))]
pub async fn update_task_date(conn: &mut DbConnection<'_>, id: i64, date: &str) -> DbResult<usize> {
    Ok(diesel::update(scheduler::table.find(id))
        .set(scheduler::date.eq(date))
        .execute(conn)
        .await?)
}

/// ## Summary
/// Deletes a task, returning the number of rows removed.
///
/// ## Errors
/// Returns database errors if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete_task(conn: &mut DbConnection<'_>, id: i64) -> DbResult<usize> {
    Ok(diesel::delete(scheduler::table.find(id))
        .execute(conn)
        .await?)
}

/// Wraps `needle` in `%` after escaping `LIKE` wildcards.
fn build_like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
