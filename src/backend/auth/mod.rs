//! Authentication Module
//!
//! User registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - Credential store (users table)
//! ├── sessions.rs     - JWT signing/verification and the session cookie
//! ├── service.rs      - AuthService: register, login, verify
//! └── handlers/       - HTTP handlers
//!     ├── register.rs
//!     ├── login.rs
//!     ├── profile.rs
//!     └── logout.rs
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → bcrypt hash stored → public user returned
//! 2. **Login**: credentials verified → JWT set as the `token` cookie
//! 3. **Profile**: cookie verified → decoded claims returned
//! 4. **Logout**: cookie cleared on the client
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless HS256 JWTs with an `exp` claim
//! - Unknown user and wrong password produce the same 401

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Authentication service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, profile, register};
pub use service::AuthService;
pub use sessions::{Claims, SESSION_COOKIE};
