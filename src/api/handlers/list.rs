use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use super::params::{resolve, AccountParams, ContainerParams};
use crate::api::encoder::IndentedJson;
use crate::api::errors::ApiError;
use crate::application::dto::{FileListing, Listing, PathMessage};
use crate::application::errors::ListError;
use crate::application::use_cases::ListChildrenUseCase;
use crate::domain::value_objects::ResourcePath;

/// A listing, or the path message describing why the node could not be read.
/// Both are sent with status 200.
fn listing_response<T: Serialize>(result: Result<T, ListError>) -> Response {
    match result {
        Ok(listing) => IndentedJson(listing).into_response(),
        Err(e) => IndentedJson(PathMessage::from(e)).into_response(),
    }
}

/// GET /api/{version}/accounts
#[utoipa::path(
    get,
    path = "/api/{version}/accounts",
    tag = "accounts",
    params(("version" = String, Path, description = "API version segment")),
    responses(
        (status = 200, description = "Account names, or a path message when the root is unreadable", body = Listing)
    )
)]
pub async fn list_accounts_handler(State(use_case): State<Arc<ListChildrenUseCase>>) -> Response {
    listing_response(use_case.directories(&ResourcePath::Root).await)
}

/// GET /api/{version}/accounts/{account}/containers
#[utoipa::path(
    get,
    path = "/api/{version}/accounts/{account}/containers",
    tag = "containers",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name")
    ),
    responses(
        (status = 200, description = "Container names, or a path message when the account is unreadable", body = Listing),
        (status = 400, description = "Invalid account name")
    )
)]
pub async fn list_containers_handler(
    State(use_case): State<Arc<ListChildrenUseCase>>,
    Path(params): Path<AccountParams>,
) -> Result<Response, ApiError> {
    let account = resolve(params)?;
    Ok(listing_response(use_case.directories(&account).await))
}

/// GET /api/{version}/accounts/{account}/containers/{container}
#[utoipa::path(
    get,
    path = "/api/{version}/accounts/{account}/containers/{container}",
    tag = "objects",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name"),
        ("container" = String, Path, description = "Container name")
    ),
    responses(
        (status = 200, description = "Object names, or a path message when the container is unreadable", body = FileListing),
        (status = 400, description = "Invalid account or container name")
    )
)]
pub async fn list_objects_handler(
    State(use_case): State<Arc<ListChildrenUseCase>>,
    Path(params): Path<ContainerParams>,
) -> Result<Response, ApiError> {
    let container = resolve(params)?;
    Ok(listing_response(use_case.objects(&container).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::StorageError;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_failure_is_a_path_message() {
        let response = listing_response::<Listing>(Err(ListError {
            path: "./storage/ghost".to_string(),
            source: StorageError::NotFound(std::io::Error::from_raw_os_error(2)),
        }));

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["Path"], "./storage/ghost");
        assert_eq!(
            value["Message"],
            std::io::Error::from_raw_os_error(2).to_string()
        );
    }
}
