//! Server Module
//!
//! Everything needed to turn configuration into a running Axum router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and the database pool
//! └── init.rs         - Migrations and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: connect, then run migrations
//! 3. **Uploads**: create the upload directory
//! 4. **Router Creation**: all routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::{build_app, create_app, run_migrations};
pub use state::AppState;
