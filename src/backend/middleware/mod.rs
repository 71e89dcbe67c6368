//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Session-cookie authentication extractor

pub mod auth;

pub use auth::{session_token, AuthUser};
