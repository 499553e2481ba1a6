use axum::extract::{multipart::MultipartRejection, Multipart};
use tracing::debug;

use crate::application::dto::UploadedFile;
use crate::application::errors::FormError;

/// Form field that carries uploaded files
pub const FILE_FIELD: &str = "file";

/// Decode every `file` part that has a filename. Other fields are skipped.
pub async fn collect_files(
    form: Result<Multipart, MultipartRejection>,
) -> Result<Vec<UploadedFile>, FormError> {
    let mut multipart = form.map_err(|rejection| FormError(rejection.body_text()))?;
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| FormError(e.body_text()))?
    {
        let file_name = match (field.name(), field.file_name()) {
            (Some(FILE_FIELD), Some(name)) if !name.is_empty() => name.to_string(),
            (name, _) => {
                debug!(field = ?name, "Skipping non-file form field");
                continue;
            }
        };

        let content = field.bytes().await.map_err(|e| FormError(e.body_text()))?;
        debug!(file = %file_name, bytes = content.len(), "Decoded file part");
        files.push(UploadedFile::new(file_name, content));
    }

    Ok(files)
}
