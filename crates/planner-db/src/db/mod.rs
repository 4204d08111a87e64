use crate::error::DbResult;
use std::future::Future;
use std::pin::Pin;

pub mod connection;
pub mod migration;
pub mod query;
pub mod schema;
pub mod transaction;

/// Hands out scoped pooled connections.
///
/// Request handlers receive the provider through the router instead of a
/// process-wide handle; a connection returns to the pool when dropped.
pub trait DbProvider: Send + Sync {
    fn get_connection<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = DbResult<connection::DbConnection<'a>>> + Send + 'a>>;
}
