use crate::client::{ensure_success, TransferClient};
use crate::error::{Result, TransferError};
use common::constants::PARTIAL_FILE_SUFFIX;
use common::file_utils;
use reqwest::{Method, Response};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::info;

impl TransferClient {
    /// Download `url` to the configured download path and return its absolute path
    pub async fn download(&self, url: &str) -> Result<PathBuf> {
        let target = self.settings.download_path.clone();
        self.download_to(url, target).await
    }

    /// Download `url` to `target`, replacing any existing file there
    ///
    /// The body is streamed into a temporary sibling and renamed over `target`
    /// only once complete, so a rejected or interrupted download leaves the
    /// previous file untouched. The content type is not checked.
    pub async fn download_to(&self, url: &str, target: impl AsRef<Path>) -> Result<PathBuf> {
        file_utils::validate_input(url).map_err(TransferError::invalid_argument("url"))?;
        file_utils::validate_input(&target.as_ref().to_string_lossy())
            .map_err(TransferError::invalid_argument("target"))?;

        let target = file_utils::absolute_path(target.as_ref()).map_err(TransferError::io(
            "Failed to resolve download target",
            target.as_ref(),
        ))?;

        info!(url = %url, "Downloading file");

        let response = self.http.get(url).send().await?;
        let response = ensure_success(Method::GET, url, response).await?;
        let written = save_response(response, &target).await?;

        info!(path = ?target, bytes = written, "File saved");
        Ok(target)
    }
}

/// Persist a response body at `target` via temp file + fsync + rename
async fn save_response(response: Response, target: &Path) -> Result<u64> {
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(TransferError::io("Failed to create output directory", parent))?;

    // The partial file is removed when `partial_path` drops, which covers errors
    // and callers that drop this future mid-stream
    let (file, partial_path) = tempfile::Builder::new()
        .prefix(&file_utils::partial_file_prefix(target))
        .suffix(PARTIAL_FILE_SUFFIX)
        .tempfile_in(parent)
        .map_err(TransferError::io("Failed to create file", parent))?
        .into_parts();

    let written = write_body(response, File::from_std(file), &partial_path).await?;

    partial_path
        .persist(target)
        .map_err(|e| TransferError::Io {
            context: "Failed to replace download target",
            path: target.to_path_buf(),
            source: e.error,
        })?;

    Ok(written)
}

async fn write_body(mut response: Response, mut file: File, partial: &Path) -> Result<u64> {
    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk)
            .await
            .map_err(TransferError::io("Failed to write file", partial))?;
        written += chunk.len() as u64;
    }

    file.flush()
        .await
        .map_err(TransferError::io("Failed to write file", partial))?;
    file.sync_all()
        .await
        .map_err(TransferError::io("Failed to sync file to disk", partial))?;

    Ok(written)
}
