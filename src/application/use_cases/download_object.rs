use std::sync::Arc;
use tracing::{info, warn};

use crate::application::dto::DownloadMetadata;
use crate::application::errors::DownloadError;
use crate::application::ports::{BlobReader, HierarchyStore};
use crate::domain::value_objects::ResourcePath;
use crate::infrastructure::storage::PathResolver;

/// Use case: Stream an object's content
pub struct DownloadObjectUseCase {
    resolver: Arc<PathResolver>,
    store: Arc<dyn HierarchyStore>,
}

impl DownloadObjectUseCase {
    pub fn new(resolver: Arc<PathResolver>, store: Arc<dyn HierarchyStore>) -> Self {
        Self { resolver, store }
    }

    pub async fn execute(
        &self,
        object: &ResourcePath,
    ) -> Result<(DownloadMetadata, BlobReader), DownloadError> {
        let path = self.resolver.resolve(object);
        info!(path = %path.display(), "Get object");

        let (reader, size_bytes) = self.store.read(&path).await.map_err(|e| {
            warn!(path = %path.display(), error = %e, "Get object failed");
            DownloadError::from_storage(&path.display().to_string(), e)
        })?;

        let metadata = DownloadMetadata {
            path: path.display().to_string(),
            size_bytes,
        };

        Ok((metadata, reader))
    }
}
