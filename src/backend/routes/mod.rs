//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Router assembly, layers, static files, fallback
//! └── api_routes.rs   - API endpoints and the health check
//! ```
//!
//! # Route Order
//!
//! 1. **API Routes** - `/`, `/api/*`
//! 2. **Static Files** - `/uploads/*`
//! 3. **Fallback Handler** - JSON 404

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
