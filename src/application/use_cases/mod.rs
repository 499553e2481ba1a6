mod create_folder;
mod delete_folder;
mod delete_object;
mod download_object;
mod list_children;
mod upload_object;
mod upload_objects;

pub use create_folder::CreateFolderUseCase;
pub use delete_folder::DeleteFolderUseCase;
pub use delete_object::DeleteObjectUseCase;
pub use download_object::DownloadObjectUseCase;
pub use list_children::ListChildrenUseCase;
pub use upload_object::UploadObjectUseCase;
pub use upload_objects::UploadObjectsUseCase;
