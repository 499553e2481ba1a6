use std::sync::Arc;

use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::HierarchyStore,
    use_cases::{
        CreateFolderUseCase, DeleteFolderUseCase, DeleteObjectUseCase, DownloadObjectUseCase,
        ListChildrenUseCase, UploadObjectUseCase, UploadObjectsUseCase,
    },
};
use crate::config::Config;
use crate::infrastructure::storage::{LocalHierarchyStore, PathResolver};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    store: Option<Arc<dyn HierarchyStore>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: None,
        }
    }

    /// Initialize the filesystem store and make sure the storage root exists
    pub async fn with_storage(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let store = LocalHierarchyStore::new();
        store.init(&self.config.storage_root).await.map_err(|e| {
            tracing::error!(
                root = %self.config.storage_root.display(),
                error = %e,
                "Failed to initialize storage root"
            );
            e
        })?;

        info!(root = %self.config.storage_root.display(), "Storage root ready");
        self.store = Some(Arc::new(store));
        Ok(self)
    }

    /// Use a caller-provided store instead of the local filesystem
    pub fn with_store(mut self, store: Arc<dyn HierarchyStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let store = self.store.ok_or("Hierarchy store not initialized")?;
        let resolver = Arc::new(PathResolver::new(self.config.storage_root.clone()));

        let create_folder_use_case = Arc::new(CreateFolderUseCase::new(
            Arc::clone(&resolver),
            Arc::clone(&store),
        ));

        let delete_folder_use_case = Arc::new(DeleteFolderUseCase::new(
            Arc::clone(&resolver),
            Arc::clone(&store),
        ));

        let list_use_case = Arc::new(ListChildrenUseCase::new(
            Arc::clone(&resolver),
            Arc::clone(&store),
        ));

        let download_use_case = Arc::new(DownloadObjectUseCase::new(
            Arc::clone(&resolver),
            Arc::clone(&store),
        ));

        let delete_use_case = Arc::new(DeleteObjectUseCase::new(
            Arc::clone(&resolver),
            Arc::clone(&store),
        ));

        let upload_use_case = Arc::new(UploadObjectUseCase::new(
            Arc::clone(&resolver),
            Arc::clone(&store),
        ));

        let upload_many_use_case = Arc::new(UploadObjectsUseCase::with_legacy_message(
            Arc::clone(&resolver),
            Arc::clone(&store),
            self.config.legacy_upload_message,
        ));

        info!(
            legacy_upload_message = self.config.legacy_upload_message,
            "Application layer initialized"
        );

        Ok(AppState {
            create_folder_use_case,
            delete_folder_use_case,
            list_use_case,
            download_use_case,
            delete_use_case,
            upload_use_case,
            upload_many_use_case,
            config: self.config,
        })
    }
}
