/**
 * Server Initialization
 *
 * This module handles the setup of the Axum application: connecting to the
 * database, running migrations, preparing the upload directory and building
 * the router.
 *
 * # Initialization Process
 *
 * 1. Connect to the database (`create_app` only)
 * 2. Run pending migrations from `migrations/`
 * 3. Create the upload directory if needed
 * 4. Build `AppState` and the router
 *
 * # Error Handling
 *
 * Every step is fatal. A server that cannot reach its database or write its
 * uploads would only answer 500s, so startup stops instead.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Apply the schema migrations embedded at compile time
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations complete");
    Ok(())
}

/// Create the application on an existing pool
///
/// Tests call this with an in-memory pool.
pub async fn build_app(config: ServerConfig, pool: SqlitePool) -> Result<Router, BackendError> {
    run_migrations(&pool).await?;

    let app_state = AppState::new(config, pool);
    app_state.uploads.ensure_dir().await.map_err(|e| {
        tracing::error!(
            "Cannot create upload directory {}: {}",
            app_state.uploads.dir().display(),
            e
        );
        e
    })?;

    Ok(create_router(app_state))
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened, a migration fails, or the
/// upload directory cannot be created.
pub async fn create_app(config: ServerConfig) -> Result<Router, BackendError> {
    tracing::info!("Initializing inkpost backend server");

    let pool = connect_database(&config.database_url).await.map_err(|e| {
        tracing::error!("Database connection failed: {}", e);
        e
    })?;

    let app = build_app(config, pool).await?;
    tracing::info!("Router configured");
    Ok(app)
}
