use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;
use utoipa::ToSchema;

use crate::domain::outcome::Outcome;

/// Result of a mutating operation: the affected path and what happened to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PathMessage {
    pub path: String,
    pub message: String,
}

impl PathMessage {
    pub fn new(path: &Path, outcome: &Outcome) -> Self {
        Self {
            path: path.display().to_string(),
            message: outcome.message(),
        }
    }
}

/// Child directories of an account or of the storage root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Listing {
    pub dirs: Vec<String>,
}

/// Objects stored in a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct FileListing {
    pub files: Vec<String>,
}

/// Outcome of one file in a multi-file upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct FileStatus {
    /// Original filename sent by the client
    pub name: String,
    /// Destination path, empty when the name could not be resolved
    pub path: String,
    pub uploaded: bool,
    pub message: String,
}

/// Aggregate result of a multi-file upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UploadReport {
    pub path: String,
    pub message: String,
    pub files: Vec<FileStatus>,
}

/// A `file` part decoded from a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Metadata sent alongside a streamed object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadMetadata {
    pub path: String,
    pub size_bytes: u64,
}
