/**
 * Register Handler
 *
 * POST /api/register
 *
 * # Registration Process
 *
 * 1. Trim the username and reject empty fields
 * 2. Reject a username that is already taken
 * 3. Hash the password with bcrypt and store the user
 * 4. Return the public view of the new user (never the hash)
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::shared::{CredentialsRequest, SharedError, UserPublic};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed JSON, username or password empty
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "secret" }
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    State(auth): State<AuthService>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserPublic>), BackendError> {
    let Json(request) = payload.map_err(|e| SharedError::serialization(e.body_text()))?;
    let credentials = request.validate()?;
    tracing::info!("Register request for username: {}", credentials.username);

    let user = auth.register(&pool, credentials).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
