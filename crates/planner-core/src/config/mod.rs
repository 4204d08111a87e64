use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub web: WebConfig,
    pub tasks: TasksConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file.
    pub url: String,
    pub max_connections: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Directory whose files are served at the site root.
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TasksConfig {
    /// Upper bound on the number of tasks returned by a list request.
    pub list_limit: u32,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it or
    /// validating the result fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 7540)?
            .set_default("database.url", "scheduler.db")?
            .set_default("database.max_connections", 4)?
            .set_default("logging.level", "info")?
            .set_default("web.dir", "web")?
            .set_default("tasks.list_limit", 50)?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Rejects settings that would leave the server unable to do useful work.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` naming the first offending key.
    pub fn validate(&self) -> CoreResult<()> {
        if self.database.url.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "database.url must not be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(CoreError::ConfigError(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.tasks.list_limit == 0 {
            return Err(CoreError::ConfigError(
                "tasks.list_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
