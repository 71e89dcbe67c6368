//! GET /api/post/{id}

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::posts::db::get_post as find_post;
use crate::shared::PostView;

/// Single post with its author populated
///
/// An ID that is not a UUID cannot name a post, so it is a 404 like any
/// other unknown ID.
pub async fn get_post(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<PostView>, BackendError> {
    let id = Uuid::parse_str(&id).map_err(|_| {
        tracing::debug!("Malformed post id: {}", id);
        BackendError::not_found("Post")
    })?;

    let post = find_post(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))?;

    Ok(Json(post))
}
