/**
 * Authentication Extractor
 *
 * Protects routes that need a logged-in user. The session token is read
 * from the `token` cookie, verified with the app's `AuthService`, and the
 * decoded claims are handed to the handler.
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::{Claims, SESSION_COOKIE};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Pull the session token out of the request cookies
///
/// An empty cookie value (what logout leaves behind) counts as missing.
pub fn session_token(parts: &Parts) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Axum extractor for the authenticated user
///
/// Rejects with `401` when the cookie is missing or the token does not
/// verify. Must come before any body-consuming extractor.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts).ok_or_else(|| {
            tracing::warn!("Missing session cookie");
            BackendError::unauthenticated("No token found")
        })?;

        let claims = state.auth.verify(&token)?;
        Ok(AuthUser(claims))
    }
}
