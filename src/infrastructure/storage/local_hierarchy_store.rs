use async_trait::async_trait;
use std::io::{self, ErrorKind};
use std::path::Path;
use tokio::fs::{self, DirBuilder, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::debug;

use crate::application::ports::{BlobReader, EntryKind, HierarchyStore, StorageError};

/// Buffer size for I/O operations. 256KB balances throughput and memory
/// for sequential copies.
const BUFFER_SIZE: usize = 256 * 1024;

/// Permission bits for account and container directories
const DIRECTORY_MODE: u32 = 0o755;

/// Hierarchy store backed by the local filesystem
pub struct LocalHierarchyStore {
    durable_writes: bool,
}

impl LocalHierarchyStore {
    pub fn new() -> Self {
        Self::with_durability(true)
    }

    pub fn with_durability(durable_writes: bool) -> Self {
        Self { durable_writes }
    }

    /// Create the storage root if it does not exist yet
    pub async fn init(&self, root: &Path) -> Result<(), StorageError> {
        self.create_dir(root).await
    }

    fn classify(e: io::Error) -> StorageError {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound(e)
        } else {
            StorageError::Io(e)
        }
    }
}

impl Default for LocalHierarchyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HierarchyStore for LocalHierarchyStore {
    async fn exists(&self, path: &Path) -> Result<bool, StorageError> {
        Ok(fs::try_exists(path).await?)
    }

    async fn create_dir(&self, path: &Path) -> Result<(), StorageError> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(DIRECTORY_MODE);

        // recursive creation tolerates a concurrent creator of the same path
        builder.create(path).await?;
        Ok(())
    }

    async fn remove_dir(&self, path: &Path) -> Result<(), StorageError> {
        fs::remove_dir_all(path)
            .await
            .map_err(Self::classify)
    }

    async fn list(&self, path: &Path, kind: EntryKind) -> Result<Vec<String>, StorageError> {
        let mut entries = fs::read_dir(path)
            .await
            .map_err(Self::classify)?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_type = entry.file_type().await?;
            let matches = match kind {
                EntryKind::Directory => file_type.is_dir(),
                EntryKind::File => file_type.is_file(),
            };
            if matches {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        debug!(path = %path.display(), ?kind, count = names.len(), "Listed entries");
        Ok(names)
    }

    async fn read(&self, path: &Path) -> Result<(BlobReader, u64), StorageError> {
        let metadata = fs::metadata(path)
            .await
            .map_err(Self::classify)?;

        // A directory at an object path is not an object
        if !metadata.is_file() {
            return Err(StorageError::NotFound(io::Error::new(
                ErrorKind::NotFound,
                "Is a directory",
            )));
        }

        let file = File::open(path)
            .await
            .map_err(Self::classify)?;

        Ok((
            Box::pin(BufReader::with_capacity(BUFFER_SIZE, file)),
            metadata.len(),
        ))
    }

    async fn remove_file(&self, path: &Path) -> Result<(), StorageError> {
        fs::remove_file(path)
            .await
            .map_err(Self::classify)
    }

    async fn write(&self, path: &Path, mut reader: BlobReader) -> Result<u64, StorageError> {
        // File::create truncates, so an existing object is replaced in place
        let mut file = BufWriter::with_capacity(BUFFER_SIZE, File::create(path).await?);
        let mut buffer = vec![0u8; BUFFER_SIZE];
        let mut total_bytes = 0u64;

        loop {
            let n = reader.read(&mut buffer).await?;
            if n == 0 {
                break;
            }
            file.write_all(&buffer[..n]).await?;
            total_bytes += n as u64;
        }

        file.flush().await?;

        if self.durable_writes {
            file.get_mut().sync_all().await?;
        }

        debug!(path = %path.display(), bytes = total_bytes, "Object written");
        Ok(total_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn reader(content: &'static [u8]) -> BlobReader {
        Box::pin(Cursor::new(content))
    }

    #[tokio::test]
    async fn test_init_creates_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("storage");

        let store = LocalHierarchyStore::new();
        store.init(&root).await.unwrap();

        assert!(root.is_dir());
        // idempotent
        store.init(&root).await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_directories_use_fixed_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("acme");

        LocalHierarchyStore::new().create_dir(&path).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        // the process umask can only clear bits
        assert_eq!(mode & 0o777 & !DIRECTORY_MODE, 0);
    }

    #[tokio::test]
    async fn test_create_dir_builds_missing_ancestors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("acme").join("photos");

        let store = LocalHierarchyStore::new();
        store.create_dir(&path).await.unwrap();

        assert!(store.exists(&path).await.unwrap());
        assert!(store.exists(&temp.path().join("acme")).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_dir_is_recursive() {
        let temp = TempDir::new().unwrap();
        let account = temp.path().join("acme");
        let container = account.join("photos");

        let store = LocalHierarchyStore::new();
        store.create_dir(&container).await.unwrap();
        store
            .write(&container.join("cat.png"), reader(b"meow"))
            .await
            .unwrap();

        store.remove_dir(&account).await.unwrap();

        assert!(!store.exists(&account).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_missing_dir_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = LocalHierarchyStore::new()
            .remove_dir(&temp.path().join("ghost"))
            .await;

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_not_found_keeps_os_error_text() {
        let temp = TempDir::new().unwrap();
        let err = LocalHierarchyStore::new()
            .list(&temp.path().join("ghost"), EntryKind::Directory)
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::NotFound(_)));
        assert_eq!(err.to_string(), io::Error::from_raw_os_error(2).to_string());
    }

    #[tokio::test]
    async fn test_list_filters_by_kind() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        let store = LocalHierarchyStore::new();
        store.create_dir(&root.join("a")).await.unwrap();
        store.create_dir(&root.join("b")).await.unwrap();
        store.write(&root.join("c.txt"), reader(b"c")).await.unwrap();

        let dirs: HashSet<String> = store
            .list(root, EntryKind::Directory)
            .await
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(dirs, HashSet::from(["a".to_string(), "b".to_string()]));

        let files = store.list(root, EntryKind::File).await.unwrap();
        assert_eq!(files, vec!["c.txt".to_string()]);
    }

    #[tokio::test]
    async fn test_list_unreadable_path_is_error() {
        let temp = TempDir::new().unwrap();
        let result = LocalHierarchyStore::new()
            .list(&temp.path().join("missing"), EntryKind::Directory)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_write_and_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.bin");

        let store = LocalHierarchyStore::with_durability(false);
        let written = store.write(&path, reader(b"Hello, World!")).await.unwrap();
        assert_eq!(written, 13);

        let (mut stream, size) = store.read(&path).await.unwrap();
        assert_eq!(size, 13);

        let mut buffer = Vec::new();
        stream.read_to_end(&mut buffer).await.unwrap();
        assert_eq!(buffer, b"Hello, World!");
    }

    #[tokio::test]
    async fn test_write_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.bin");

        let store = LocalHierarchyStore::new();
        store
            .write(&path, reader(b"a much longer first version"))
            .await
            .unwrap();
        store.write(&path, reader(b"short")).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"short");
    }

    #[tokio::test]
    async fn test_read_missing_or_directory_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = LocalHierarchyStore::new();

        let missing = store.read(&temp.path().join("nope")).await;
        assert!(matches!(missing, Err(StorageError::NotFound(_))));

        let directory = store.read(temp.path()).await;
        assert!(matches!(directory, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let result = LocalHierarchyStore::new()
            .write(&temp.path().join("no").join("such.txt"), reader(b"x"))
            .await;

        assert!(matches!(result, Err(StorageError::Io(_))));
    }
}
