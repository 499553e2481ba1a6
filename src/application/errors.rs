//! Error types shared by the use cases.
//!
//! Only a failed object read becomes an HTTP error. The other kinds are folded
//! into an [`Outcome`] so the client sees a 200 with an explanatory message.

use thiserror::Error;

use crate::application::dto::PathMessage;
use crate::application::ports::StorageError;
use crate::domain::errors::DomainError;
use crate::domain::outcome::{Outcome, ONLY_ONE_FILE};

/// Multipart payload could not be decoded; carries the parser's error text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FormError(pub String);

#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("{}", ONLY_ONE_FILE)]
    Cardinality(usize),

    #[error(transparent)]
    InvalidName(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl UploadError {
    pub fn outcome(&self) -> Outcome {
        match self {
            UploadError::Cardinality(_) => Outcome::CardinalityViolation,
            other => Outcome::Failed(other.to_string()),
        }
    }
}

/// Directory listing failed; reported to the client as a path message
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ListError {
    pub path: String,
    #[source]
    pub source: StorageError,
}

impl From<ListError> for PathMessage {
    fn from(err: ListError) -> Self {
        PathMessage {
            path: err.path,
            message: err.source.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl DownloadError {
    /// Classify a failed read of the object at `path`
    pub fn from_storage(path: &str, err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => DownloadError::NotFound(path.to_string()),
            other => DownloadError::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::HierarchyLevel;

    #[test]
    fn test_cardinality_maps_to_fixed_message() {
        let err = UploadError::Cardinality(2);
        assert_eq!(err.outcome(), Outcome::CardinalityViolation);
        assert_eq!(
            err.to_string(),
            "You must upload only one file at a time on this method"
        );
    }

    #[test]
    fn test_form_error_keeps_parser_text() {
        let text = "Invalid `boundary` for `multipart/form-data` request";
        let err: UploadError = FormError(text.to_string()).into();
        assert_eq!(err.outcome(), Outcome::Failed(text.to_string()));
    }

    #[test]
    fn test_invalid_name_is_a_failure() {
        let err: UploadError = DomainError::InvalidSegment {
            level: HierarchyLevel::Object,
            reason: "name cannot be empty".to_string(),
        }
        .into();

        assert_eq!(
            err.outcome().message(),
            "Invalid object name: name cannot be empty"
        );
    }

    #[test]
    fn test_list_error_becomes_path_message() {
        let err = ListError {
            path: "./storage/ghost".to_string(),
            source: StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            )),
        };

        let message = PathMessage::from(err);
        assert_eq!(message.path, "./storage/ghost");
        assert_eq!(message.message, "permission denied");
    }

    #[test]
    fn test_missing_file_becomes_download_not_found() {
        let missing = StorageError::NotFound(std::io::ErrorKind::NotFound.into());
        let err = DownloadError::from_storage("./storage/a/b/c", missing);
        assert!(matches!(err, DownloadError::NotFound(ref path) if path == "./storage/a/b/c"));

        let broken = StorageError::Io(std::io::Error::other("disk on fire"));
        let err = DownloadError::from_storage("./storage/a/b/c", broken);
        assert!(matches!(err, DownloadError::Storage(_)));
    }
}
