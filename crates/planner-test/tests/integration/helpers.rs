#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Setting up isolated test databases (one SQLite file per test)
//! - Creating a test Salvo service wired like `main.rs`
//! - Making HTTP requests and decoding responses
//!
//! ## Database Isolation
//! Each test gets its own temporary directory holding the database file and
//! the static web root. Both are removed when the `TestApp` is dropped.

use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};
use serde::de::DeserializeOwned;

use planner_test::app::app::routes;
use planner_test::app::clock::{Clock, ClockHandler};
use planner_test::app::config::{
    ConfigHandler, DatabaseConfig, LoggingConfig, ServerConfig, Settings, TasksConfig, WebConfig,
};
use planner_test::app::db_handler::DbProviderHandler;
use planner_test::db::db::connection::create_pool;
use planner_test::db::db::migration::run_migrations;
use planner_test::rules::CalendarDate;

pub use planner_test::app::app::api::response::{ErrorResponse, TaskResponse};

/// The fixed "today" every test runs on.
pub const TODAY: &str = "20240115";

const BASE_URL: &str = "http://127.0.0.1:7540";

/// Contents of the `index.html` placed in every test web root.
pub const INDEX_HTML: &str = "<html><body>planner</body></html>";

/// A router over a fresh database, pinned to `TODAY`.
pub struct TestApp {
    _dir: tempfile::TempDir,
    service: Service,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_list_limit(50).await
    }

    pub async fn with_list_limit(list_limit: u32) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = dir
            .path()
            .join("scheduler.db")
            .to_string_lossy()
            .into_owned();

        let web_dir = dir.path().join("web");
        std::fs::create_dir_all(&web_dir).expect("Failed to create web dir");
        std::fs::write(web_dir.join("index.html"), INDEX_HTML).expect("Failed to write index");
        std::fs::write(web_dir.join("app.js"), "console.log('planner');")
            .expect("Failed to write script");

        let settings = Settings {
            database: DatabaseConfig {
                url: db_url.clone(),
                max_connections: 1,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 7540,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            web: WebConfig {
                dir: web_dir.to_string_lossy().into_owned(),
            },
            tasks: TasksConfig { list_limit },
        };

        run_migrations(&db_url)
            .await
            .expect("Failed to run migrations");
        let pool = create_pool(&db_url, 1)
            .await
            .expect("Failed to create database pool for test service");

        let today = CalendarDate::parse(TODAY).expect("valid test date");

        let router = Router::new()
            .hoop(DbProviderHandler { provider: pool })
            .hoop(ConfigHandler {
                settings: settings.clone(),
            })
            .hoop(ClockHandler {
                clock: Clock::Fixed(today),
            })
            .push(routes(&settings));

        Self {
            _dir: dir,
            service: Service::new(router),
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        TestResponse::read(TestClient::get(url(path)).send(&self.service).await).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        TestResponse::read(TestClient::delete(url(path)).send(&self.service).await).await
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        TestResponse::read(
            TestClient::post(url(path))
                .json(body)
                .send(&self.service)
                .await,
        )
        .await
    }

    pub async fn post_raw_json(&self, path: &str, body: &str) -> TestResponse {
        TestResponse::read(
            TestClient::post(url(path))
                .raw_json(body.to_string())
                .send(&self.service)
                .await,
        )
        .await
    }

    pub async fn put_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        TestResponse::read(
            TestClient::put(url(path))
                .json(body)
                .send(&self.service)
                .await,
        )
        .await
    }

    /// Creates a task through the API and returns its id.
    pub async fn create_task(&self, body: serde_json::Value) -> String {
        self.post_json("/api/task", &body)
            .await
            .assert_status(StatusCode::CREATED)
            .json::<TaskResponse>()
            .id
    }
}

fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Status and body of a finished request.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    async fn read(mut response: Response) -> Self {
        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.take_string().await.unwrap_or_default();
        Self { status, body }
    }

    /// Asserts the response status code.
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {} with body {}",
            self.status, self.body
        );
        self
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Body is not the expected JSON ({e}): {}", self.body))
    }

    /// Decodes an error body and returns its message.
    pub fn error_message(&self) -> String {
        self.json::<ErrorResponse>().error
    }
}
