use std::path::Path;

use crate::domain::errors::DomainError;

use super::HierarchyLevel;

/// A single validated path component: an account, container or object name.
///
/// Names are taken verbatim from the request. Anything that could make the
/// resolved path leave its parent directory is rejected: empty names, the
/// relative components `.` and `..`, and names carrying a separator or NUL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl Segment {
    /// Most filesystems cap a single name at 255 bytes
    pub const MAX_LENGTH: usize = 255;

    pub fn new(value: impl Into<String>, level: HierarchyLevel) -> Result<Self, DomainError> {
        let value = value.into();
        let invalid = |reason: String| DomainError::InvalidSegment { level, reason };

        if value.is_empty() {
            return Err(invalid("name cannot be empty".to_string()));
        }

        if value == "." || value == ".." {
            return Err(invalid(format!(
                "relative path component '{}' is not allowed",
                value
            )));
        }

        if value.contains(['/', '\\', '\0']) {
            return Err(invalid(
                "name must not contain path separators or NUL".to_string(),
            ));
        }

        if value.len() > Self::MAX_LENGTH {
            return Err(invalid(format!(
                "name too long: {} > {}",
                value.len(),
                Self::MAX_LENGTH
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for Segment {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_verbatim_names() {
        for name in ["photos", "my bucket", "report.final.pdf", "ünïcode", "..hidden"] {
            let segment = Segment::new(name, HierarchyLevel::Object).unwrap();
            assert_eq!(segment.as_str(), name);
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = Segment::new("", HierarchyLevel::Account).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid account name: name cannot be empty"
        );
    }

    #[test]
    fn test_rejects_traversal_components() {
        assert!(Segment::new("..", HierarchyLevel::Container).is_err());
        assert!(Segment::new(".", HierarchyLevel::Container).is_err());
        assert!(Segment::new("../etc", HierarchyLevel::Container).is_err());
        assert!(Segment::new("a\\b", HierarchyLevel::Object).is_err());
        assert!(Segment::new("nul\0byte", HierarchyLevel::Object).is_err());
    }

    #[test]
    fn test_rejects_overlong_name() {
        let name = "x".repeat(Segment::MAX_LENGTH + 1);
        let err = Segment::new(name, HierarchyLevel::Object).unwrap_err();
        assert!(err.to_string().contains("name too long"));

        let name = "x".repeat(Segment::MAX_LENGTH);
        assert!(Segment::new(name, HierarchyLevel::Object).is_ok());
    }

    #[test]
    fn test_error_carries_level() {
        let err = Segment::new("..", HierarchyLevel::Container).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidSegment {
                level: HierarchyLevel::Container,
                ..
            }
        ));
    }
}
