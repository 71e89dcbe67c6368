//! Backend Module
//!
//! All server-side code: an Axum HTTP server over a SQLite database, with
//! cookie-based sessions and cover-image uploads.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Credential store, session tokens, auth handlers
//! - **`posts`** - Content store and post handlers
//! - **`uploads`** - Cover file storage and multipart form reading
//! - **`middleware`** - The `AuthUser` extractor
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── posts/          - Blog posts
//! ├── uploads/        - File uploads
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Handlers parse input, call a store or service function, and return either
//! JSON or a `BackendError`, which renders as `{ "message", "status" }`.
//! Protected handlers take `AuthUser` as their first extractor; it reads the
//! `token` cookie and rejects with 401 before the body is touched.
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Blog posts
pub mod posts;

/// Cover file uploads
pub mod uploads;

/// Request extractors
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{build_app, create_app, AppState, ServerConfig};
