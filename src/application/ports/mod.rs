mod hierarchy_store;

pub use hierarchy_store::{BlobReader, EntryKind, HierarchyStore, StorageError};

#[cfg(test)]
pub use hierarchy_store::MockHierarchyStore;
