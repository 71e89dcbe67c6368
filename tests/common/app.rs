//! Application test fixture
//!
//! Every `TestApp` gets its own in-memory SQLite database and its own
//! temporary upload directory, so tests never share state.

use std::path::{Path, PathBuf};

use axum::Router;
use axum_test::TestServer;
use inkpost::backend::server::{build_app, run_migrations, ServerConfig};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Create an in-memory pool with the schema applied
///
/// One connection that never expires: the database lives exactly as long as
/// that connection.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");

    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

/// A test server over a private database and upload directory
pub struct TestApp {
    pub server: TestServer,
    router: Router,
    pub pool: SqlitePool,
    upload_dir: PathBuf,
    _temp: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Build the app after adjusting the test configuration
    pub async fn with_config<F>(configure: F) -> Self
    where
        F: FnOnce(&mut ServerConfig),
    {
        let temp = tempfile::tempdir().expect("Failed to create temp dir");
        let upload_dir = temp.path().join("uploads");

        let mut config = ServerConfig::for_tests(upload_dir.clone());
        configure(&mut config);

        let pool = create_test_pool().await;
        let router = build_app(config, pool.clone())
            .await
            .expect("Failed to build app");
        let server = TestServer::new(router.clone()).expect("Failed to create test server");

        Self {
            server,
            router,
            pool,
            upload_dir,
            _temp: temp,
        }
    }

    /// Keep cookies from responses and send them on later requests,
    /// the way a browser session would
    pub fn with_saved_cookies(mut self) -> Self {
        self.server.save_cookies();
        self
    }

    /// The router behind `server`, for opening another client on the same app
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Names of the files currently in the upload directory
    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.upload_dir)
            .expect("Upload dir should exist")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
