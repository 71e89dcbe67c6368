//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory app fixture behind an `axum_test::TestServer`
//! - Authentication and post form helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod app;
pub mod auth_helpers;

// Re-export commonly used utilities
pub use app::*;
pub use auth_helpers::*;
