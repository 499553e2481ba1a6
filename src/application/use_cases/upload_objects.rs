use std::io::Cursor;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::application::dto::{FileStatus, UploadReport, UploadedFile};
use crate::application::errors::{FormError, UploadError};
use crate::application::ports::HierarchyStore;
use crate::domain::outcome::Outcome;
use crate::domain::value_objects::ResourcePath;
use crate::infrastructure::storage::PathResolver;

/// Use case: Upload any number of files into a container, each stored under
/// its original filename
pub struct UploadObjectsUseCase {
    resolver: Arc<PathResolver>,
    store: Arc<dyn HierarchyStore>,
    legacy_message: bool,
}

impl UploadObjectsUseCase {
    pub fn new(resolver: Arc<PathResolver>, store: Arc<dyn HierarchyStore>) -> Self {
        Self::with_legacy_message(resolver, store, false)
    }

    /// With `legacy_message` set, the aggregate message always reports
    /// success even when a file failed; per-file statuses stay accurate.
    pub fn with_legacy_message(
        resolver: Arc<PathResolver>,
        store: Arc<dyn HierarchyStore>,
        legacy_message: bool,
    ) -> Self {
        Self {
            resolver,
            store,
            legacy_message,
        }
    }

    /// Execute upload workflow. Files are written in form order and the
    /// loop stops at the first failure.
    pub async fn execute(
        &self,
        container: &ResourcePath,
        form: Result<Vec<UploadedFile>, FormError>,
    ) -> UploadReport {
        let container_path = self.resolver.resolve(container);
        let report = |outcome: Outcome, files: Vec<FileStatus>| UploadReport {
            path: container_path.display().to_string(),
            message: outcome.message(),
            files,
        };

        let files = match form {
            Ok(files) => files,
            Err(e) => {
                warn!(path = %container_path.display(), error = %e, "Upload rejected");
                return report(Outcome::Failed(e.to_string()), Vec::new());
            }
        };

        if let Err(e) = self.store.create_dir(&container_path).await {
            error!(path = %container_path.display(), error = %e, "Make directory failed");
            return report(Outcome::Failed(e.to_string()), Vec::new());
        }

        let mut statuses = Vec::with_capacity(files.len());
        let mut failure = None;

        for file in files {
            let (status, result) = self.upload_one(container, file).await;
            statuses.push(status);
            if let Err(e) = result {
                failure = Some(e);
                break;
            }
        }

        let outcome = match failure {
            Some(e) if !self.legacy_message => e.outcome(),
            _ => Outcome::UploadedAll,
        };

        report(outcome, statuses)
    }

    async fn upload_one(
        &self,
        container: &ResourcePath,
        file: UploadedFile,
    ) -> (FileStatus, Result<u64, UploadError>) {
        let name = file.file_name;

        // the client's filename becomes the object name and must stay inside the container
        let target = match container.child_object(&name) {
            Ok(target) => target,
            Err(e) => {
                warn!(file = %name, error = %e, "Rejected upload filename");
                let status = FileStatus {
                    name,
                    path: String::new(),
                    uploaded: false,
                    message: e.to_string(),
                };
                return (status, Err(e.into()));
            }
        };

        let path = self.resolver.resolve(&target);
        match self.store.write(&path, Box::pin(Cursor::new(file.content))).await {
            Ok(bytes) => {
                info!(file = %path.display(), bytes, "Upload file successfully");
                let status = FileStatus {
                    name,
                    path: path.display().to_string(),
                    uploaded: true,
                    message: Outcome::Uploaded.message(),
                };
                (status, Ok(bytes))
            }
            Err(e) => {
                error!(file = %path.display(), error = %e, "Copy file error");
                let status = FileStatus {
                    name,
                    path: path.display().to_string(),
                    uploaded: false,
                    message: e.to_string(),
                };
                (status, Err(e.into()))
            }
        }
    }
}
