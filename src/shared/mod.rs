//! Shared Module
//!
//! Types that cross the HTTP boundary: request bodies, response bodies and
//! the public projections of stored records. Nothing in here touches the
//! database or the filesystem.

/// Shared error types
pub mod error;

/// User request/response types
pub mod user;

/// Post records and views
pub mod post;

pub use error::SharedError;
pub use post::{AuthorRef, NewPost, Post, PostPatch, PostView};
pub use user::{Credentials, CredentialsRequest, LoginResponse, UserPublic};
