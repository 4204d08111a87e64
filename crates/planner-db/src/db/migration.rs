//! Schema bootstrap.

use std::path::Path;

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// ## Summary
/// Creates the database file if needed and applies pending migrations.
///
/// Safe to call on every start: migrations that already ran are skipped.
///
/// ## Errors
/// Returns an error if the database cannot be opened or a migration fails.
#[tracing::instrument]
pub async fn run_migrations(database_url: &str) -> anyhow::Result<()> {
    if Path::new(database_url).exists() {
        tracing::debug!("Database file found");
    } else {
        tracing::info!("Database file does not exist, creating it");
    }

    let url = database_url.to_string();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn = diesel::SqliteConnection::establish(&url)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;
        Ok::<_, anyhow::Error>(applied.len())
    })
    .await??;

    tracing::info!(applied, "Database schema is up to date");

    Ok(())
}
