/**
 * Post Form Reader
 *
 * Reads the multipart body of `POST /api/post` and `PUT /api/post`.
 * Text fields are collected as strings; the `cover` file field is streamed
 * straight into the `UploadStore` as it arrives.
 *
 * At most one cover file is accepted. A file part with an empty file name
 * (what browsers send when no file was picked) counts as no file.
 */

use axum::extract::Multipart;

use crate::backend::error::BackendError;
use crate::backend::uploads::store::{StoredUpload, UploadStore};
use crate::shared::SharedError;

/// Multipart field carrying the cover file
pub const COVER_FIELD: &str = "cover";

/// Fields of a post form
#[derive(Debug, Default)]
pub struct PostForm {
    pub id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover: Option<StoredUpload>,
}

/// Read every field of a post form
///
/// If reading fails after the cover was stored, the stored file is removed
/// before the error is returned.
pub async fn read_post_form(
    multipart: &mut Multipart,
    uploads: &UploadStore,
) -> Result<PostForm, BackendError> {
    let mut form = PostForm::default();

    if let Err(e) = read_fields(multipart, uploads, &mut form).await {
        if let Some(cover) = form.cover.take() {
            uploads.discard(&cover).await;
        }
        return Err(e);
    }

    Ok(form)
}

async fn read_fields(
    multipart: &mut Multipart,
    uploads: &UploadStore,
    form: &mut PostForm,
) -> Result<(), BackendError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            COVER_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                if file_name.is_empty() {
                    continue;
                }
                if form.cover.is_some() {
                    return Err(SharedError::validation(
                        COVER_FIELD,
                        "Only one cover file may be uploaded",
                    )
                    .into());
                }
                form.cover = Some(uploads.store(&file_name, field).await?);
            }
            "id" => form.id = Some(field.text().await?),
            "title" => form.title = Some(field.text().await?),
            "summary" => form.summary = Some(field.text().await?),
            "content" => form.content = Some(field.text().await?),
            other => {
                tracing::debug!("Ignoring unexpected form field: {}", other);
            }
        }
    }

    Ok(())
}
