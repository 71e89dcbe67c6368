/**
 * Post Wire Types
 *
 * This module defines the post record as stored, the populated view
 * returned by read endpoints, and the input types used to create and
 * patch posts.
 *
 * A freshly created post is returned with `author` as the bare user ID.
 * Read and update endpoints return a `PostView` whose `author` is resolved
 * to `{ id, username }`.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// A post as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    /// Path of the stored cover file, e.g. `uploads/<uuid>.png`
    pub cover: String,
    /// ID of the user who created the post
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author as resolved on read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorRef {
    pub id: Uuid,
    pub username: String,
}

/// A post with its author populated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover: String,
    pub author: AuthorRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover: String,
}

/// Fields an author may change
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover: Option<String>,
}

impl NewPost {
    /// Build a new post from optional form fields
    ///
    /// Title, summary and content must be present. An empty form field
    /// counts as absent; any other text, whitespace included, is kept as sent.
    pub fn from_parts(
        title: Option<String>,
        summary: Option<String>,
        content: Option<String>,
        cover: String,
    ) -> Result<Self, SharedError> {
        Ok(Self {
            title: require("title", title)?,
            summary: require("summary", summary)?,
            content: require("content", content)?,
            cover,
        })
    }
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.summary.is_none()
            && self.content.is_none()
            && self.cover.is_none()
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, SharedError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SharedError::required(field)),
    }
}
