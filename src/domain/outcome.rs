//! Result kinds of hierarchy operations.
//!
//! Every mutating operation answers with a human-readable message rather than
//! an error status, so the outcome carries the exact wording clients see.

use super::value_objects::HierarchyLevel;

pub const FOLDER_CREATED: &str = "Folder was created!";
pub const DIRECTORY_EXISTS: &str = "Directory already exists";
pub const FOLDER_DELETED: &str = "Folder was deleted!";
pub const DIRECTORY_MISSING: &str = "Directory not exists";
pub const FILE_DELETED: &str = "file was deleted!";
pub const FILE_MISSING: &str = "File not exists";
pub const FILE_UPLOADED: &str = "File is already uploaded!";
pub const FILES_UPLOADED: &str = "Files are already uploaded!";
pub const ONLY_ONE_FILE: &str = "You must upload only one file at a time on this method";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created,
    AlreadyExists,
    Deleted(HierarchyLevel),
    NotExists(HierarchyLevel),
    /// Single-file upload written
    Uploaded,
    /// Every part of a multi-file upload written
    UploadedAll,
    CardinalityViolation,
    /// I/O or form failure, carrying the underlying error text
    Failed(String),
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Created => FOLDER_CREATED.to_string(),
            Outcome::AlreadyExists => DIRECTORY_EXISTS.to_string(),
            Outcome::Deleted(HierarchyLevel::Object) => FILE_DELETED.to_string(),
            Outcome::Deleted(_) => FOLDER_DELETED.to_string(),
            Outcome::NotExists(HierarchyLevel::Object) => FILE_MISSING.to_string(),
            Outcome::NotExists(_) => DIRECTORY_MISSING.to_string(),
            Outcome::Uploaded => FILE_UPLOADED.to_string(),
            Outcome::UploadedAll => FILES_UPLOADED.to_string(),
            Outcome::CardinalityViolation => ONLY_ONE_FILE.to_string(),
            Outcome::Failed(text) => text.clone(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
