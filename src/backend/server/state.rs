/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the single state container handed to the router.
 * It holds:
 * - The SQLite connection pool
 * - The authentication service (secret and bcrypt cost)
 * - The upload store
 * - The loaded configuration
 *
 * Every field is cheap to clone: the pool and the service are reference
 * counted internally, the configuration is behind an `Arc`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need, e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::service::AuthService;
use crate::backend::server::config::ServerConfig;
use crate::backend::uploads::store::UploadStore;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Registration, login and token verification
    pub auth: AuthService,

    /// Where uploaded cover files are written
    pub uploads: UploadStore,

    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, db: SqlitePool) -> Self {
        Self {
            db,
            auth: AuthService::new(config.auth.clone()),
            uploads: UploadStore::new(config.upload_dir.clone()),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for UploadStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.uploads.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
