//! Authentication Handlers Module
//!
//! HTTP handlers for the credential endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/register - Create a user
//! - **`login`** - POST /api/login - Verify credentials, set the session cookie
//! - **`profile`** - GET /api/profile - Decoded claims of the session token
//! - **`logout`** - POST /api/logout - Clear the session cookie

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
pub use profile::profile;
pub use register::register;
