use crate::client::{ensure_success, TransferClient};
use crate::error::{Result, TransferError};
use common::constants::{
    FIELD_COMMENT, FIELD_FILE, FIELD_IS_PRIMARY, FIELD_USER_ID, FILE_MEDIA_TYPE, UPLOAD_ENDPOINT,
};
use common::{file_utils, UploadMetadata};
use reqwest::multipart;
use reqwest::Method;
use std::path::Path;
use tracing::info;

impl TransferClient {
    /// Upload a file with the default metadata and return the response body
    pub async fn upload(&self, path: impl AsRef<Path>) -> Result<String> {
        self.upload_with(path, &UploadMetadata::default()).await
    }

    /// Upload a file to `{url}/api/files` and return the response body
    ///
    /// The file is read fully into memory and sent in a single POST along with
    /// the `userId`, `comment` and `isPrimary` parts taken from `metadata`.
    pub async fn upload_with(
        &self,
        path: impl AsRef<Path>,
        metadata: &UploadMetadata,
    ) -> Result<String> {
        let path = path.as_ref();
        file_utils::validate_input(&path.to_string_lossy())
            .map_err(TransferError::invalid_argument("path"))?;

        info!(path = ?path, "Uploading file");

        let is_file = tokio::fs::metadata(path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(TransferError::NotFound(path.to_path_buf()));
        }

        file_utils::validate_input(&self.settings.url)
            .map_err(TransferError::invalid_argument("url"))?;

        let file_name =
            file_utils::upload_file_name(path).map_err(TransferError::invalid_argument("path"))?;
        let content = tokio::fs::read(path)
            .await
            .map_err(TransferError::io("Failed to read file", path))?;

        let form = build_multipart_form(file_name, content, metadata)?;
        let url = file_utils::join_endpoint(&self.settings.url, UPLOAD_ENDPOINT);

        let response = self.http.post(&url).multipart(form).send().await?;
        let response = ensure_success(Method::POST, &url, response).await?;
        let result = response.text().await?;

        info!(path = ?path, "Upload complete");
        info!(response = %result, "API response");

        Ok(result)
    }
}

/// Build the four-part upload form: the file followed by the metadata fields
fn build_multipart_form(
    file_name: String,
    content: Vec<u8>,
    metadata: &UploadMetadata,
) -> Result<multipart::Form> {
    let file_part = multipart::Part::bytes(content)
        .file_name(file_name)
        .mime_str(FILE_MEDIA_TYPE)?;

    let form = multipart::Form::new()
        .part(FIELD_FILE, file_part)
        .text(FIELD_USER_ID, metadata.user_id.clone())
        .text(FIELD_COMMENT, metadata.comment.clone())
        .text(FIELD_IS_PRIMARY, metadata.is_primary_text());

    Ok(form)
}
