//! Posts Module
//!
//! Blog posts: the content store over the `posts` table and the HTTP
//! handlers for creating, listing, reading and editing them.

/// Database operations for posts
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::RECENT_POSTS_LIMIT;
pub use handlers::{create_post, get_post, list_posts, update_post};
