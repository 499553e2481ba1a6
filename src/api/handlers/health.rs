use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use utoipa::ToSchema;

use crate::application::use_cases::ListChildrenUseCase;
use crate::domain::value_objects::ResourcePath;

/// Version reported by GET /version
pub const API_VERSION: &str = "v2";

/// Storage readiness response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    /// `ready` or `not_ready`
    pub status: String,
    pub service: String,
    /// `readable` or `unreadable`
    pub storage: String,
    /// Number of accounts under the storage root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// RFC 3339 time of the check
    pub timestamp: String,
    pub response_time_ms: u64,
}

/// GET /healthz
/// Liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    )
)]
pub async fn health_handler() -> &'static str {
    "ok\n"
}

/// GET /version
#[utoipa::path(
    get,
    path = "/version",
    tag = "health",
    responses(
        (status = 200, description = "API version", body = String, content_type = "text/plain")
    )
)]
pub async fn version_handler() -> String {
    format!("{}\n", API_VERSION)
}

/// GET /healthz/ready
/// Readiness probe: the storage root must be a readable directory
#[utoipa::path(
    get,
    path = "/healthz/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Storage root is not readable", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(
    State(use_case): State<Arc<ListChildrenUseCase>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let start_time = Instant::now();
    let check = use_case.directories(&ResourcePath::Root).await;
    let response_time_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);

    let (status, response) = match check {
        Ok(listing) => (
            StatusCode::OK,
            ReadinessResponse {
                status: "ready".to_string(),
                service: env!("CARGO_PKG_NAME").to_string(),
                storage: "readable".to_string(),
                accounts: Some(listing.dirs.len()),
                error: None,
                timestamp: chrono::Utc::now().to_rfc3339(),
                response_time_ms,
            },
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ReadinessResponse {
                status: "not_ready".to_string(),
                service: env!("CARGO_PKG_NAME").to_string(),
                storage: "unreadable".to_string(),
                accounts: None,
                error: Some(format!("{}: {}", e.path, e)),
                timestamp: chrono::Utc::now().to_rfc3339(),
                response_time_ms,
            },
        ),
    };

    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockHierarchyStore, StorageError};
    use crate::infrastructure::storage::PathResolver;

    fn use_case(store: MockHierarchyStore) -> Arc<ListChildrenUseCase> {
        Arc::new(ListChildrenUseCase::new(
            Arc::new(PathResolver::new("./storage")),
            Arc::new(store),
        ))
    }

    #[tokio::test]
    async fn test_health_handler() {
        assert_eq!(health_handler().await, "ok\n");
        assert_eq!(version_handler().await, "v2\n");
    }

    #[tokio::test]
    async fn test_ready_when_root_is_readable() {
        let mut store = MockHierarchyStore::new();
        store
            .expect_list()
            .returning(|_, _| Ok(vec!["acme".to_string()]));

        let (status, body) = readiness_handler(State(use_case(store))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.0.status, "ready");
        assert_eq!(body.0.accounts, Some(1));
        assert!(body.0.error.is_none());
    }

    #[tokio::test]
    async fn test_not_ready_when_root_is_missing() {
        let mut store = MockHierarchyStore::new();
        store
            .expect_list()
            .returning(|_, _| Err(StorageError::NotFound(std::io::ErrorKind::NotFound.into())));

        let (status, body) = readiness_handler(State(use_case(store))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.0.storage, "unreadable");
        assert_eq!(body.0.accounts, None);
        assert!(body.0.error.is_some());
    }
}
