use crate::domain::errors::DomainError;

use super::{HierarchyLevel, Segment};

/// Address of a node in the storage hierarchy.
///
/// The hierarchy is strictly three levels deep; an object always names its
/// container and account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourcePath {
    Root,
    Account {
        account: Segment,
    },
    Container {
        account: Segment,
        container: Segment,
    },
    Object {
        account: Segment,
        container: Segment,
        object: Segment,
    },
}

impl ResourcePath {
    pub fn account(account: &str) -> Result<Self, DomainError> {
        Ok(Self::Account {
            account: Segment::new(account, HierarchyLevel::Account)?,
        })
    }

    pub fn container(account: &str, container: &str) -> Result<Self, DomainError> {
        Ok(Self::Container {
            account: Segment::new(account, HierarchyLevel::Account)?,
            container: Segment::new(container, HierarchyLevel::Container)?,
        })
    }

    pub fn object(account: &str, container: &str, object: &str) -> Result<Self, DomainError> {
        Ok(Self::Object {
            account: Segment::new(account, HierarchyLevel::Account)?,
            container: Segment::new(container, HierarchyLevel::Container)?,
            object: Segment::new(object, HierarchyLevel::Object)?,
        })
    }

    pub fn level(&self) -> HierarchyLevel {
        match self {
            Self::Root => HierarchyLevel::Root,
            Self::Account { .. } => HierarchyLevel::Account,
            Self::Container { .. } => HierarchyLevel::Container,
            Self::Object { .. } => HierarchyLevel::Object,
        }
    }

    /// The enclosing node, `None` for the root
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::Root => None,
            Self::Account { .. } => Some(Self::Root),
            Self::Container { account, .. } => Some(Self::Account {
                account: account.clone(),
            }),
            Self::Object {
                account, container, ..
            } => Some(Self::Container {
                account: account.clone(),
                container: container.clone(),
            }),
        }
    }

    /// Address of an object named `name` inside this container.
    ///
    /// Used for multi-file uploads, where the object name is the client's
    /// original filename rather than a route parameter.
    pub fn child_object(&self, name: &str) -> Result<Self, DomainError> {
        match self {
            Self::Container { account, container } => Ok(Self::Object {
                account: account.clone(),
                container: container.clone(),
                object: Segment::new(name, HierarchyLevel::Object)?,
            }),
            other => Err(DomainError::InvalidSegment {
                level: HierarchyLevel::Object,
                reason: format!("objects can only be placed in a container, not in {}", other.level()),
            }),
        }
    }

    /// Path components from the account down, empty for the root
    pub fn segments(&self) -> Vec<&Segment> {
        match self {
            Self::Root => Vec::new(),
            Self::Account { account } => vec![account],
            Self::Container { account, container } => vec![account, container],
            Self::Object {
                account,
                container,
                object,
            } => vec![account, container, object],
        }
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let segments = self.segments();
        if segments.is_empty() {
            return write!(f, "/");
        }
        for segment in segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
