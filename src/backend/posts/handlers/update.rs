/**
 * Update Post Handler
 *
 * PUT /api/post
 *
 * Multipart form with the post `id` plus any of `title`, `summary`,
 * `content` and a new `cover` file. Fields left out keep their stored
 * values. Only the post's author may update it.
 *
 * A newly uploaded cover that ends up unused (bad form, unknown post, not
 * the author) is removed. The cover it replaces stays on disk.
 */

use axum::{
    extract::{Multipart, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::update_post as apply_patch;
use crate::backend::server::state::AppState;
use crate::backend::uploads::{read_post_form, PostForm};
use crate::shared::{PostPatch, PostView, SharedError};

/// Update post handler
///
/// # Errors
///
/// * `401 Unauthorized` - no valid session cookie
/// * `400 Bad Request` - missing `id` or malformed form
/// * `403 Forbidden` - the caller is not the author
/// * `404 Not Found` - unknown or malformed post ID
pub async fn update_post(
    AuthUser(claims): AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PostView>, BackendError> {
    let form = read_post_form(&mut multipart, &state.uploads).await?;
    let new_cover = form.cover.clone();

    let result = match parse_form(form) {
        Ok((id, patch)) => apply_patch(&state.db, id, claims.id, patch).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(post) => {
            tracing::info!("Post {} updated by {}", post.id, claims.username);
            Ok(Json(post))
        }
        Err(e) => {
            if let Some(cover) = new_cover {
                state.uploads.discard(&cover).await;
            }
            Err(e)
        }
    }
}

fn parse_form(form: PostForm) -> Result<(Uuid, PostPatch), BackendError> {
    let raw_id = form
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| SharedError::required("id"))?;

    let id = Uuid::parse_str(raw_id.trim()).map_err(|_| BackendError::not_found("Post"))?;

    let patch = PostPatch {
        title: form.title,
        summary: form.summary,
        content: form.content,
        cover: form.cover.map(|cover| cover.path),
    };

    Ok((id, patch))
}
