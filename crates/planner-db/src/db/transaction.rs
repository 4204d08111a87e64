//! Transaction helper for multi-statement task operations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use diesel_async::scoped_futures::ScopedFutureExt;
//! use planner_db::db::transaction::with_transaction;
//!
//! with_transaction(conn, |conn| async move {
//!     let task = task::get_task(conn, id).await?;
//!     task::delete_task(conn, id).await?;
//!     Ok(task)
//! }.scope_boxed()).await?;
//! ```

use diesel_async::{AsyncConnection, scoped_futures::ScopedBoxFuture};

/// ## Summary
/// Runs a database transaction and returns the closure result.
///
/// The closure's error type only needs to absorb diesel errors, so callers
/// keep their own error enums instead of collapsing into `anyhow`.
///
/// ## Errors
/// Returns any error produced by the closure, or errors raised while starting
/// or committing the transaction.
pub async fn with_transaction<'a, 'conn, C, T, E, F>(
    conn: &'conn mut C,
    callback: F,
) -> Result<T, E>
where
    C: AsyncConnection + Send,
    F: for<'r> FnOnce(&'r mut C) -> ScopedBoxFuture<'a, 'r, Result<T, E>> + Send + 'a,
    E: From<diesel::result::Error> + Send + 'a,
    T: Send + 'a,
    'a: 'conn,
{
    conn.transaction::<T, E, F>(callback).await
}
