use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::PathMessage;
use crate::application::ports::HierarchyStore;
use crate::domain::outcome::Outcome;
use crate::domain::value_objects::ResourcePath;
use crate::infrastructure::storage::PathResolver;

/// Use case: Recursively delete an account or container
pub struct DeleteFolderUseCase {
    resolver: Arc<PathResolver>,
    store: Arc<dyn HierarchyStore>,
}

impl DeleteFolderUseCase {
    pub fn new(resolver: Arc<PathResolver>, store: Arc<dyn HierarchyStore>) -> Self {
        Self { resolver, store }
    }

    /// Remove the directory and everything below it
    pub async fn execute(&self, resource: &ResourcePath) -> PathMessage {
        let path = self.resolver.resolve(resource);
        let level = resource.level();

        let outcome = match self.store.exists(&path).await {
            Ok(false) => Outcome::NotExists(level),
            Ok(true) => match self.store.remove_dir(&path).await {
                Ok(()) => {
                    info!(node = %level, path = %path.display(), "Delete directory");
                    Outcome::Deleted(level)
                }
                Err(e) => {
                    error!(node = %level, path = %path.display(), error = %e, "Remove directory failed");
                    Outcome::Failed(e.to_string())
                }
            },
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to stat directory");
                Outcome::Failed(e.to_string())
            }
        };

        PathMessage::new(&path, &outcome)
    }
}
