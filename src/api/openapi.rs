use axum::response::Json;
use utoipa::OpenApi;

use crate::api::handlers::health::ReadinessResponse;
use crate::application::dto::{FileListing, FileStatus, Listing, PathMessage, UploadReport};

/// OpenAPI specification for the hierarchy store API.
///
/// Only the nested layout is documented; `/v1/...` mirrors it one to one.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hierarchy Store API",
        version = "2.0.0",
        description = "Account / container / object storage on a local filesystem"
    ),
    servers(
        (url = "http://localhost:8088", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::version_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::list::list_accounts_handler,
        crate::api::handlers::list::list_containers_handler,
        crate::api::handlers::list::list_objects_handler,
        crate::api::handlers::folders::create_account_handler,
        crate::api::handlers::folders::delete_account_handler,
        crate::api::handlers::folders::create_container_handler,
        crate::api::handlers::folders::delete_container_handler,
        crate::api::handlers::upload::upload_handler,
        crate::api::handlers::upload::upload_many_handler,
        crate::api::handlers::download::download_handler,
        crate::api::handlers::delete::delete_handler,
    ),
    components(
        schemas(
            PathMessage,
            Listing,
            FileListing,
            FileStatus,
            UploadReport,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "accounts", description = "Account lifecycle"),
        (name = "containers", description = "Container lifecycle"),
        (name = "objects", description = "Object storage operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_hierarchy_levels() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/{version}/accounts"));
        assert!(paths
            .iter()
            .any(|p| p.as_str() == "/api/{version}/accounts/{account}/containers/{container}/buckets/{bucket}"));
        assert!(paths.iter().any(|p| p.as_str() == "/healthz"));
    }
}
