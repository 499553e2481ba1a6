use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::PathMessage;
use crate::application::ports::HierarchyStore;
use crate::domain::outcome::Outcome;
use crate::domain::value_objects::ResourcePath;
use crate::infrastructure::storage::PathResolver;

/// Use case: Create an account or container directory
pub struct CreateFolderUseCase {
    resolver: Arc<PathResolver>,
    store: Arc<dyn HierarchyStore>,
}

impl CreateFolderUseCase {
    pub fn new(resolver: Arc<PathResolver>, store: Arc<dyn HierarchyStore>) -> Self {
        Self { resolver, store }
    }

    /// Create the directory unless something already exists at its path.
    /// Failures are reported in the message, never as an error.
    pub async fn execute(&self, resource: &ResourcePath) -> PathMessage {
        let path = self.resolver.resolve(resource);

        let outcome = match self.store.exists(&path).await {
            Ok(true) => Outcome::AlreadyExists,
            Ok(false) => match self.store.create_dir(&path).await {
                Ok(()) => {
                    info!(node = %resource.level(), path = %path.display(), "Make directory");
                    Outcome::Created
                }
                Err(e) => {
                    error!(node = %resource.level(), path = %path.display(), error = %e, "Make directory failed");
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
