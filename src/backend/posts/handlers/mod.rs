//! Post Handlers Module
//!
//! # Handlers
//!
//! - **`create_post`** - POST /api/post - Create a post with a cover file
//! - **`list_posts`** - GET /api/post - Most recent posts
//! - **`get_post`** - GET /api/post/{id} - Single post
//! - **`update_post`** - PUT /api/post - Author-only partial update

pub mod create;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_post;
pub use get::get_post;
pub use list::list_posts;
pub use update::update_post;
