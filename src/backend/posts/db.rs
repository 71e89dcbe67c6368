//! Database operations for posts
//!
//! The content store. Reads join `users` so that every post comes back with
//! its author resolved to `{ id, username }`.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::{AuthorRef, NewPost, Post, PostPatch, PostView};

/// Number of posts returned by the listing endpoint
pub const RECENT_POSTS_LIMIT: i64 = 20;

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    summary: String,
    content: String,
    cover: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct PostViewRow {
    id: Uuid,
    title: String,
    summary: String,
    content: String,
    cover: String,
    author_id: Uuid,
    author_username: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            summary: row.summary,
            content: row.content,
            cover: row.cover,
            author: row.author_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<PostViewRow> for PostView {
    fn from(row: PostViewRow) -> Self {
        PostView {
            id: row.id,
            title: row.title,
            summary: row.summary,
            content: row.content,
            cover: row.cover,
            author: AuthorRef {
                id: row.author_id,
                username: row.author_username,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const VIEW_SELECT: &str = r#"
    SELECT p.id, p.title, p.summary, p.content, p.cover, p.author_id,
           u.username AS author_username, p.created_at, p.updated_at
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

/// Create a new post owned by `author_id`
pub async fn create_post(
    pool: &SqlitePool,
    author_id: Uuid,
    post: NewPost,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (id, title, summary, content, cover, author_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, title, summary, content, cover, author_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&post.title)
    .bind(&post.summary)
    .bind(&post.content)
    .bind(&post.cover)
    .bind(author_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Most recent posts first, at most `limit` of them
///
/// Posts created within the same timestamp come back newest insert first.
pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<PostView>, sqlx::Error> {
    let query = format!(
        "{} ORDER BY p.created_at DESC, p.rowid DESC LIMIT $1",
        VIEW_SELECT
    );

    let rows = sqlx::query_as::<_, PostViewRow>(&query)
        .bind(limit.max(0))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(PostView::from).collect())
}

/// Get a post with its author resolved
pub async fn get_post(pool: &SqlitePool, id: Uuid) -> Result<Option<PostView>, sqlx::Error> {
    let query = format!("{} WHERE p.id = $1", VIEW_SELECT);

    let row = sqlx::query_as::<_, PostViewRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(PostView::from))
}

/// Get the stored post row without joining the author
pub async fn get_post_row(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, summary, content, cover, author_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Post::from))
}

/// Apply `patch` to a post, but only for its author
///
/// # Errors
///
/// * `NotFound` - no post with this ID
/// * `Forbidden` - `requester_id` is not the post's author
///
/// The author column is never part of the update. An empty patch leaves
/// the row, including `updated_at`, untouched.
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    requester_id: Uuid,
    patch: PostPatch,
) -> Result<PostView, BackendError> {
    let existing = get_post_row(pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))?;

    if existing.author != requester_id {
        tracing::warn!(
            "User {} tried to edit post {} owned by {}",
            requester_id,
            id,
            existing.author
        );
        return Err(BackendError::forbidden(
            "You are not the author and cannot edit this post.",
        ));
    }

    if patch.is_empty() {
        tracing::debug!("Empty patch for post {}, nothing to update", id);
        return get_post(pool, id)
            .await?
            .ok_or_else(|| BackendError::not_found("Post"));
    }

    sqlx::query(
        r#"
        UPDATE posts
        SET title = COALESCE($1, title),
            summary = COALESCE($2, summary),
            content = COALESCE($3, content),
            cover = COALESCE($4, cover),
            updated_at = $5
        WHERE id = $6
        "#,
    )
    .bind(patch.title)
    .bind(patch.summary)
    .bind(patch.content)
    .bind(patch.cover)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    get_post(pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))
}
