use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use std::path::Path;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Message is the raw OS error text, surfaced to clients unchanged
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Nothing at the path; keeps the OS error text like `Io`
    #[error("{0}")]
    NotFound(std::io::Error),
}

/// Type alias for async reader
pub type BlobReader = Pin<Box<dyn AsyncRead + Send>>;

/// Kind of directory entry to enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// Port for the filesystem operations behind the storage hierarchy.
///
/// All paths are absolute paths already produced by the path resolver; the
/// store performs no naming logic of its own.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HierarchyStore: Send + Sync {
    /// Check whether anything (file or directory) exists at `path`
    async fn exists(&self, path: &Path) -> Result<bool, StorageError>;

    /// Create a directory and any missing ancestors
    async fn create_dir(&self, path: &Path) -> Result<(), StorageError>;

    /// Remove a directory and everything below it
    async fn remove_dir(&self, path: &Path) -> Result<(), StorageError>;

    /// Names of the immediate children of `path` of the given kind,
    /// in the order the filesystem yields them
    async fn list(&self, path: &Path, kind: EntryKind) -> Result<Vec<String>, StorageError>;

    /// Open a regular file for streaming, returning the reader and its size
    async fn read(&self, path: &Path) -> Result<(BlobReader, u64), StorageError>;

    /// Remove a single regular file
    async fn remove_file(&self, path: &Path) -> Result<(), StorageError>;

    /// Write the reader's content to `path`, replacing any existing file.
    /// Returns the number of bytes written.
    async fn write(&self, path: &Path, reader: BlobReader) -> Result<u64, StorageError>;
}
