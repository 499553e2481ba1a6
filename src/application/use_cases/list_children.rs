use std::sync::Arc;
use tracing::{debug, error};

use crate::application::dto::{FileListing, Listing};
use crate::application::errors::ListError;
use crate::application::ports::{EntryKind, HierarchyStore};
use crate::domain::value_objects::ResourcePath;
use crate::infrastructure::storage::PathResolver;

/// Use case: List the children of a hierarchy node
pub struct ListChildrenUseCase {
    resolver: Arc<PathResolver>,
    store: Arc<dyn HierarchyStore>,
}

impl ListChildrenUseCase {
    pub fn new(resolver: Arc<PathResolver>, store: Arc<dyn HierarchyStore>) -> Self {
        Self { resolver, store }
    }

    /// Child directories: accounts of the root, containers of an account
    pub async fn directories(&self, resource: &ResourcePath) -> Result<Listing, ListError> {
        let dirs = self.list(resource, EntryKind::Directory).await?;
        Ok(Listing { dirs })
    }

    /// Objects stored in a container
    pub async fn objects(&self, resource: &ResourcePath) -> Result<FileListing, ListError> {
        let files = self.list(resource, EntryKind::File).await?;
        Ok(FileListing { files })
    }

    async fn list(&self, resource: &ResourcePath, kind: EntryKind) -> Result<Vec<String>, ListError> {
        let path = self.resolver.resolve(resource);

        match self.store.list(&path, kind).await {
            Ok(names) => {
                debug!(node = %resource.level(), path = %path.display(), children = ?names, "List children");
                Ok(names)
            }
            Err(source) => {
                error!(path = %path.display(), error = %source, "Failed to read directory");
                Err(ListError {
                    path: path.display().to_string(),
                    source,
                })
            }
        }
    }
}
