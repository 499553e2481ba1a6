/// Depth of a node in the Account → Container → Object hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyLevel {
    /// The storage root itself (parent of all accounts)
    Root,
    /// Top-level namespace, one directory under the root
    Account,
    /// Namespace nested in an account
    Container,
    /// A single stored file
    Object,
}

impl std::fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HierarchyLevel::Root => write!(f, "root"),
            HierarchyLevel::Account => write!(f, "account"),
            HierarchyLevel::Container => write!(f, "container"),
            HierarchyLevel::Object => write!(f, "object"),
        }
    }
}
