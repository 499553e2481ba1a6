use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::application::dto::{PathMessage, UploadedFile};
use crate::application::errors::{FormError, UploadError};
use crate::application::ports::HierarchyStore;
use crate::domain::outcome::Outcome;
use crate::domain::value_objects::ResourcePath;
use crate::infrastructure::storage::PathResolver;

/// Use case: Upload exactly one file to a named object
pub struct UploadObjectUseCase {
    resolver: Arc<PathResolver>,
    store: Arc<dyn HierarchyStore>,
}

impl UploadObjectUseCase {
    pub fn new(resolver: Arc<PathResolver>, store: Arc<dyn HierarchyStore>) -> Self {
        Self { resolver, store }
    }

    /// Execute upload workflow.
    ///
    /// `form` is the decoded multipart payload; a decoding failure is
    /// reported without touching the filesystem. Every outcome is reported
    /// against the object's container.
    pub async fn execute(
        &self,
        object: &ResourcePath,
        form: Result<Vec<UploadedFile>, FormError>,
    ) -> PathMessage {
        let path = self.resolver.resolve(object);
        let container = self
            .resolver
            .resolve(&object.parent().unwrap_or(ResourcePath::Root));

        let outcome = match self.upload(&container, &path, form).await {
            Ok(bytes) => {
                info!(path = %path.display(), bytes, "Upload file successfully");
                Outcome::Uploaded
            }
            Err(e @ (UploadError::Form(_) | UploadError::Cardinality(_))) => {
                warn!(path = %path.display(), error = %e, "Upload rejected");
                e.outcome()
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Upload failed");
                e.outcome()
            }
        };

        PathMessage::new(&container, &outcome)
    }

    async fn upload(
        &self,
        container: &Path,
        path: &Path,
        form: Result<Vec<UploadedFile>, FormError>,
    ) -> Result<u64, UploadError> {
        // 1. Exactly one file part
        let files = form?;
        let [file]: [UploadedFile; 1] = files
            .try_into()
            .map_err(|files: Vec<UploadedFile>| UploadError::Cardinality(files.len()))?;

        // 2. An object upload materializes its container
        self.store.create_dir(container).await?;

        // 3. Write content, replacing any previous version
        let written = self
            .store
            .write(path, Box::pin(Cursor::new(file.content)))
            .await?;

        Ok(written)
    }
}
