use thiserror::Error;

use super::value_objects::HierarchyLevel;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid {level} name: {reason}")]
    InvalidSegment {
        level: HierarchyLevel,
        reason: String,
    },
}
