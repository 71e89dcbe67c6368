/**
 * API Route Handlers
 *
 * This module wires the API endpoints into the router and provides the
 * health check served at `/`.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/register` - User registration
 * - `POST /api/login` - Verify credentials, set the `token` cookie
 * - `GET /api/profile` - Claims of the current session (requires cookie)
 * - `POST /api/logout` - Clear the `token` cookie
 *
 * ## Posts
 * - `POST /api/post` - Create a post (requires cookie, multipart)
 * - `GET /api/post` - Most recent posts
 * - `GET /api/post/{id}` - Single post
 * - `PUT /api/post` - Update a post (requires cookie, author only)
 */

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::{login, logout, profile, register};
use crate::backend::posts::handlers::{create_post, get_post, list_posts, update_post};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Authentication for `/api/profile` and the post write routes is enforced
/// by the `AuthUser` extractor in each handler, not by a layer.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(health))
        // Authentication endpoints
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/profile", get(profile))
        .route("/api/logout", post(logout))
        // Post endpoints
        .route(
            "/api/post",
            post(create_post).get(list_posts).put(update_post),
        )
        .route("/api/post/{id}", get(get_post))
}

/// Health check
///
/// Always 200; `database` reports whether a trivial query succeeds.
pub async fn health(State(pool): State<SqlitePool>) -> Json<Value> {
    let database = match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => "Connected",
        Err(e) => {
            tracing::warn!("Health check query failed: {}", e);
            "Disconnected"
        }
    };

    Json(json!({
        "message": "Inkpost blog API is live and running!",
        "serviceStatus": "OK",
        "database": database,
    }))
}
