use std::path::{Path, PathBuf};

use crate::domain::value_objects::ResourcePath;

/// Maps hierarchy addresses to filesystem paths under the storage root
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a resource: {root}/{account}/{container}/{object}
    pub fn resolve(&self, resource: &ResourcePath) -> PathBuf {
        resource
            .segments()
            .into_iter()
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}
