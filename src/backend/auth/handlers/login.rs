/**
 * Login Handler
 *
 * POST /api/login
 *
 * Verifies the credentials, then sets the `token` session cookie and returns
 * `{ id, username }`. The token itself is only ever sent as a cookie.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::session_cookie;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{CredentialsRequest, LoginResponse, SharedError};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed JSON, username or password empty
/// * `401 Unauthorized` - unknown user or wrong password (same message for both)
/// * `500 Internal Server Error` - store or signing failure
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<LoginResponse>), BackendError> {
    let Json(request) = payload.map_err(|e| SharedError::serialization(e.body_text()))?;
    let credentials = request.validate()?;
    tracing::info!("Login request for: {}", credentials.username);

    let (token, user) = state.auth.login(&state.db, credentials).await?;
    let jar = jar.add(session_cookie(token, &state.config.cookie));

    Ok((
        jar,
        Json(LoginResponse {
            id: user.id,
            username: user.username,
        }),
    ))
}
