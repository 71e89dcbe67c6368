//! Inkpost - Main Library
//!
//! Inkpost is a small blogging backend: users register and log in with a
//! username and password, receive a session cookie, and publish posts that
//! carry an uploaded cover image.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and their validation
//!   - Users, credentials, posts, patches
//!   - `SharedError`
//!
//! - **`backend`** - The HTTP server
//!   - Axum router, SQLite persistence via sqlx
//!   - bcrypt password hashing, HS256 session tokens in a cookie
//!   - Cover uploads written to a local directory
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), inkpost::backend::BackendError> {
//! let app = create_app(ServerConfig::from_env()).await?;
//! // Serve with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for invalid input
//! - `backend::BackendError` for everything a request can fail with, each
//!   variant mapped to one HTTP status
/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
