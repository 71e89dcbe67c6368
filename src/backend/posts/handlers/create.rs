/**
 * Create Post Handler
 *
 * POST /api/post
 *
 * Multipart form with `title`, `summary`, `content` and a `cover` file. The
 * cover is streamed to the upload directory before the row is inserted; if
 * the form or the insert fails, the stored file is removed again.
 */

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::create_post as insert_post;
use crate::backend::server::state::AppState;
use crate::backend::uploads::read_post_form;
use crate::shared::{NewPost, Post};

/// Create post handler
///
/// # Errors
///
/// * `401 Unauthorized` - no valid session cookie
/// * `400 Bad Request` - missing cover file, missing text field, malformed
///   form, or the post could not be stored
pub async fn create_post(
    AuthUser(claims): AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Post>), BackendError> {
    let form = read_post_form(&mut multipart, &state.uploads).await?;
    let cover = form.cover.ok_or(BackendError::MissingFile)?;

    let parts = NewPost::from_parts(form.title, form.summary, form.content, cover.path.clone());
    let new_post = match parts {
        Ok(post) => post,
        Err(e) => {
            state.uploads.discard(&cover).await;
            return Err(e.into());
        }
    };

    match insert_post(&state.db, claims.id, new_post).await {
        Ok(post) => {
            tracing::info!("Post {} created by {}", post.id, claims.username);
            Ok((StatusCode::CREATED, Json(post)))
        }
        Err(e) => {
            tracing::error!("Failed to store post: {}", e);
            state.uploads.discard(&cover).await;
            Err(BackendError::handler(
                StatusCode::BAD_REQUEST,
                "Post creation failed.",
            ))
        }
    }
}
