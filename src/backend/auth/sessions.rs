/**
 * Session Management and JWT Tokens
 *
 * Signing and verification of session tokens, and the `token` cookie that
 * carries them. Tokens are HS256 JWTs; the secret is always passed in by the
 * caller.
 */

use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::server::config::CookieSettings;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username at the time of login
    pub username: String,
    /// User ID
    pub id: Uuid,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `secret` - HS256 signing secret
/// * `user_id` - User ID
/// * `username` - Username
/// * `ttl` - How long the token stays valid
pub fn create_token(
    secret: &[u8],
    user_id: Uuid,
    username: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = jsonwebtoken::get_current_timestamp();

    let claims = Claims {
        username: username.to_string(),
        id: user_id,
        iat: now,
        exp: now.saturating_add(ttl.as_secs()),
    };

    encode_claims(secret, &claims)
}

/// Sign arbitrary claims
pub fn encode_claims(secret: &[u8], claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret))
}

/// Verify and decode a JWT token
///
/// Fails on a bad signature, a malformed token, or an expired `exp`.
pub fn verify_token(secret: &[u8], token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret);
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Build the session cookie carrying `token`
pub fn session_cookie(token: String, settings: &CookieSettings) -> Cookie<'static> {
    let mut builder = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure)
        .path("/");

    if let Some(domain) = &settings.domain {
        builder = builder.domain(domain.clone());
    }

    builder.build()
}

/// Build a cookie that clears the session cookie in the browser
pub fn removal_cookie(settings: &CookieSettings) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), settings);
    cookie.make_removal();
    cookie
}
