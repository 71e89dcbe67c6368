/**
 * Backend Error Types
 *
 * This module defines every failure a request can end in. Each variant maps
 * to one HTTP status code; the mapping lives in `status_code()` and the
 * response body is built in `conversion`.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Validation of request bodies and forms (400)
 * - Missing cover file (400)
 * - Duplicate username (409)
 * - Bad credentials, missing or invalid session token (401)
 * - Editing someone else's post (403)
 * - Unknown post (404)
 *
 * ## Server Errors
 *
 * Store, filesystem, hashing and signing failures all surface as 500 with a
 * generic message. The underlying error is logged, never returned.
 */

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend error
///
/// # Usage
///
/// ```rust
/// use inkpost::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Post creation failed.");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    ///
    /// Used where a route maps a failure to a status other than the
    /// variant's default.
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Invalid request body or form
    #[error(transparent)]
    SharedError(#[from] SharedError),

    #[error("Username already taken: {username}")]
    DuplicateUsername { username: String },

    /// Unknown username or wrong password; the two are deliberately
    /// indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, tampered or expired session token
    #[error("Unauthenticated: {message}")]
    Unauthenticated { message: String },

    /// The requester is not the post's author
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// A post was submitted without its cover file
    #[error("No file uploaded.")]
    MissingFile,

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Upload error: {0}")]
    Upload(#[from] std::io::Error),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    Hash(String),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError`, `MissingFile` - 400 Bad Request
    /// - `Multipart` - whatever the multipart rejection carries (400, or 413
    ///   when the body limit was hit)
    /// - `InvalidCredentials`, `Unauthenticated` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `DuplicateUsername` - 409 Conflict
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(_) | Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::Multipart(err) => err.status(),
            Self::InvalidCredentials | Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateUsername { .. } => StatusCode::CONFLICT,
            Self::Store(_)
            | Self::Migration(_)
            | Self::Upload(_)
            | Self::Token(_)
            | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    ///
    /// Server-side failures collapse to "Server error" so that driver and
    /// filesystem details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::DuplicateUsername { .. } => "Username already taken".to_string(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::Unauthenticated { message } => message.clone(),
            Self::Forbidden { message } => message.clone(),
            Self::NotFound { .. } | Self::MissingFile => self.to_string(),
            Self::Multipart(err) => format!("Invalid form data: {}", err.body_text()),
            Self::Store(_)
            | Self::Migration(_)
            | Self::Upload(_)
            | Self::Token(_)
            | Self::Hash(_) => "Server error".to_string(),
        }
    }

    /// True when a store error is a UNIQUE constraint violation
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
    }
}
