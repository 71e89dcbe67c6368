//! GET /api/post

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::posts::db::{list_recent, RECENT_POSTS_LIMIT};
use crate::shared::PostView;

/// The most recent posts, newest first, with authors populated
pub async fn list_posts(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PostView>>, BackendError> {
    let posts = list_recent(&pool, RECENT_POSTS_LIMIT).await?;
    tracing::debug!("Listing {} posts", posts.len());
    Ok(Json(posts))
}
