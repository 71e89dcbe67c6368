//! Uploads Module
//!
//! Cover-image uploads: streaming a multipart file to disk under a unique
//! name, and the form reader shared by the create and update post routes.

/// Filesystem store for uploaded files
pub mod store;

/// Multipart form reader for post routes
pub mod form;

pub use form::{read_post_form, PostForm, COVER_FIELD};
pub use store::{extension_of, StoredUpload, UploadStore, PUBLIC_PREFIX};
