use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::PathMessage;
use crate::application::ports::HierarchyStore;
use crate::domain::outcome::Outcome;
use crate::domain::value_objects::{HierarchyLevel, ResourcePath};
use crate::infrastructure::storage::PathResolver;

/// Use case: Delete a single object
pub struct DeleteObjectUseCase {
    resolver: Arc<PathResolver>,
    store: Arc<dyn HierarchyStore>,
}

impl DeleteObjectUseCase {
    pub fn new(resolver: Arc<PathResolver>, store: Arc<dyn HierarchyStore>) -> Self {
        Self { resolver, store }
    }

    pub async fn execute(&self, object: &ResourcePath) -> PathMessage {
        let path = self.resolver.resolve(object);

        let outcome = match self.store.exists(&path).await {
            Ok(false) => Outcome::NotExists(HierarchyLevel::Object),
            Ok(true) => match self.store.remove_file(&path).await {
                Ok(()) => {
                    info!(path = %path.display(), "Delete object");
                    Outcome::Deleted(HierarchyLevel::Object)
                }
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Remove object failed");
                    Outcome::Failed(e.to_string())
                }
            },
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to stat object");
                Outcome::Failed(e.to_string())
            }
        };

        PathMessage::new(&path, &outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockHierarchyStore, StorageError};
    use std::path::Path;

    fn use_case(store: MockHierarchyStore) -> DeleteObjectUseCase {
        DeleteObjectUseCase::new(Arc::new(PathResolver::new("./storage")), Arc::new(store))
    }

    #[tokio::test]
    async fn test_delete_object_happy_path() {
        let mut store = MockHierarchyStore::new();
        store.expect_exists().times(1).returning(|_| Ok(true));
        store
            .expect_remove_file()
            .withf(|path| path == Path::new("./storage/acme/photos/cat.png"))
            .times(1)
            .returning(|_| Ok(()));

        let object = ResourcePath::object("acme", "photos", "cat.png").unwrap();
        let result = use_case(store).execute(&object).await;

        assert_eq!(result.path, "./storage/acme/photos/cat.png");
        assert_eq!(result.message, "file was deleted!");
    }

    #[tokio::test]
    async fn test_delete_missing_object() {
        let mut store = MockHierarchyStore::new();
        store.expect_exists().times(1).returning(|_| Ok(false));
        store.expect_remove_file().never();

        let object = ResourcePath::object("acme", "photos", "dog.png").unwrap();
        let result = use_case(store).execute(&object).await;

        assert_eq!(result.message, "File not exists");
    }

    #[tokio::test]
    async fn test_remove_failure_is_reported() {
        let mut store = MockHierarchyStore::new();
        store.expect_exists().returning(|_| Ok(true));
        store.expect_remove_file().returning(|_| {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only file system",
            )))
        });

        let object = ResourcePath::object("acme", "photos", "cat.png").unwrap();
        let result = use_case(store).execute(&object).await;

        assert_eq!(result.message, "read-only file system");
    }
}
