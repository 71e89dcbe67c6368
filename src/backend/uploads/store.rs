/**
 * Upload Store
 *
 * Writes an uploaded file into the upload directory. The bytes land under a
 * fresh UUID name first; once fully written, the file is renamed to carry
 * the extension of the client's original file name.
 *
 * # Extension Rules
 *
 * The extension is the text after the last `.` of the original name. It is
 * dropped (the stored file keeps the bare UUID name) when:
 * - the name has no `.`
 * - nothing follows the last `.`
 * - it contains anything other than ASCII letters and digits
 */

use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// URL prefix the upload directory is served under
pub const PUBLIC_PREFIX: &str = "uploads";

/// A file written by `UploadStore::store`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Public path, as stored on the post (e.g. `uploads/<uuid>.png`)
    pub path: String,
    /// Location on disk
    pub file: PathBuf,
    /// File name the client sent
    pub original_name: String,
    /// Bytes written
    pub size: u64,
}

/// Local-filesystem upload directory
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Stream a file into the upload directory
    ///
    /// On any error the partially written temporary file is removed.
    pub async fn store<S, E>(
        &self,
        original_name: &str,
        stream: S,
    ) -> Result<StoredUpload, BackendError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        BackendError: From<E>,
    {
        let temp_path = self.dir.join(Uuid::new_v4().simple().to_string());

        let size = match write_stream(&temp_path, stream).await {
            Ok(size) => size,
            Err(e) => {
                remove_quietly(&temp_path).await;
                return Err(e);
            }
        };

        let final_path = match extension_of(original_name) {
            Some(ext) => {
                let renamed = temp_path.with_extension(ext);
                if let Err(e) = tokio::fs::rename(&temp_path, &renamed).await {
                    remove_quietly(&temp_path).await;
                    return Err(e.into());
                }
                renamed
            }
            None => temp_path,
        };

        let file_name = final_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path = format!("{}/{}", PUBLIC_PREFIX, file_name);
        tracing::info!("Stored upload {:?} as {} ({} bytes)", original_name, path, size);

        Ok(StoredUpload {
            path,
            file: final_path,
            original_name: original_name.to_string(),
            size,
        })
    }

    /// Delete a stored upload that will not be referenced by any post
    pub async fn discard(&self, upload: &StoredUpload) {
        remove_quietly(&upload.file).await;
    }
}

/// Extension to append for an original file name, if any
pub fn extension_of(original_name: &str) -> Option<&str> {
    let (_, ext) = original_name.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

async fn write_stream<S, E>(path: &Path, stream: S) -> Result<u64, BackendError>
where
    S: Stream<Item = Result<Bytes, E>>,
    BackendError: From<E>,
{
    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = std::pin::pin!(stream);
    let mut size = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        size += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(size)
}

async fn remove_quietly(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove upload {}: {}", path.display(), e);
        }
    }
}
