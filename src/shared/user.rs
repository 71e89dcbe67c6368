/**
 * User Wire Types
 *
 * Request bodies for the credential endpoints and the public projection of
 * a stored user. The stored record (with its password hash) lives in
 * `backend::auth::users` and never crosses this boundary.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Public view of a user
///
/// Safe to return to clients: it carries no credential material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPublic {
    /// User's unique ID
    pub id: Uuid,
    /// User's username
    pub username: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Register and login request body
///
/// Missing fields deserialize as empty strings so that they are reported
/// as validation errors rather than JSON rejections.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CredentialsRequest {
    /// Username (trimmed before use)
    #[serde(default)]
    pub username: String,
    /// Plaintext password (hashed before storage, never trimmed)
    #[serde(default)]
    pub password: String,
}

/// Credentials after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl CredentialsRequest {
    /// Trim the username and reject empty fields
    pub fn validate(&self) -> Result<Credentials, SharedError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(SharedError::required("username"));
        }
        if self.password.is_empty() {
            return Err(SharedError::required("password"));
        }

        Ok(Credentials {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Login response body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub id: Uuid,
    pub username: String,
}
