mod local_hierarchy_store;
mod path_resolver;

pub use local_hierarchy_store::LocalHierarchyStore;
pub use path_resolver::PathResolver;
