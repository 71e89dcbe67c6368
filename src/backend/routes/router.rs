/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `DefaultBodyLimit` sized for cover uploads
 * - `TraceLayer` for a span per request
 * - `CorsLayer` for the one configured front-end origin, with credentials so
 *   the session cookie is sent
 *
 * Uploaded covers are served as static files under `/uploads`. Anything
 * else unmatched gets a JSON 404.
 */

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::backend::uploads::PUBLIC_PREFIX;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, auth service, upload store, config)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // Static cover files
    let router = router.nest_service(
        &format!("/{}", PUBLIC_PREFIX),
        ServeDir::new(app_state.uploads.dir()),
    );

    let router = router.fallback(|| async { BackendError::not_found("Route") });

    let router = router
        .layer(DefaultBodyLimit::max(app_state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http());

    let router = match app_state.config.cors_origin.as_deref() {
        Some(origin) => match cors_layer(origin) {
            Some(cors) => router.layer(cors),
            None => router,
        },
        None => router,
    };

    router.with_state(app_state)
}

/// CORS for a single origin with credentials
///
/// Returns `None` (and logs) if the origin is not a valid header value.
fn cors_layer(origin: &str) -> Option<CorsLayer> {
    let origin = match HeaderValue::from_str(origin) {
        Ok(origin) => origin,
        Err(e) => {
            tracing::warn!("Invalid CORS_ORIGIN {:?}, CORS disabled: {}", origin, e);
            return None;
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
