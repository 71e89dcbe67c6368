//! API integration tests
//!
//! Integration tests for all API endpoints

mod post_test;
