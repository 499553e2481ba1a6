use axum::extract::{Path, State};
use std::sync::Arc;

use super::params::{resolve, AccountParams, ContainerParams};
use crate::api::encoder::IndentedJson;
use crate::api::errors::ApiError;
use crate::application::dto::PathMessage;
use crate::application::use_cases::{CreateFolderUseCase, DeleteFolderUseCase};

/// POST /api/{version}/accounts/{account}
#[utoipa::path(
    post,
    path = "/api/{version}/accounts/{account}",
    tag = "accounts",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name")
    ),
    responses(
        (status = 200, description = "Created, or the reason it was not", body = PathMessage),
        (status = 400, description = "Invalid account name")
    )
)]
pub async fn create_account_handler(
    State(use_case): State<Arc<CreateFolderUseCase>>,
    Path(params): Path<AccountParams>,
) -> Result<IndentedJson<PathMessage>, ApiError> {
    let account = resolve(params)?;
    Ok(IndentedJson(use_case.execute(&account).await))
}

/// DELETE /api/{version}/accounts/{account}
/// Removes the account with all its containers and objects
#[utoipa::path(
    delete,
    path = "/api/{version}/accounts/{account}",
    tag = "accounts",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name")
    ),
    responses(
        (status = 200, description = "Deleted, or the reason it was not", body = PathMessage),
        (status = 400, description = "Invalid account name")
    )
)]
pub async fn delete_account_handler(
    State(use_case): State<Arc<DeleteFolderUseCase>>,
    Path(params): Path<AccountParams>,
) -> Result<IndentedJson<PathMessage>, ApiError> {
    let account = resolve(params)?;
    Ok(IndentedJson(use_case.execute(&account).await))
}

/// POST /api/{version}/accounts/{account}/containers/{container}
#[utoipa::path(
    post,
    path = "/api/{version}/accounts/{account}/containers/{container}",
    tag = "containers",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name"),
        ("container" = String, Path, description = "Container name")
    ),
    responses(
        (status = 200, description = "Created, or the reason it was not", body = PathMessage),
        (status = 400, description = "Invalid account or container name")
    )
)]
pub async fn create_container_handler(
    State(use_case): State<Arc<CreateFolderUseCase>>,
    Path(params): Path<ContainerParams>,
) -> Result<IndentedJson<PathMessage>, ApiError> {
    let container = resolve(params)?;
    Ok(IndentedJson(use_case.execute(&container).await))
}

/// DELETE /api/{version}/accounts/{account}/containers/{container}
#[utoipa::path(
    delete,
    path = "/api/{version}/accounts/{account}/containers/{container}",
    tag = "containers",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name"),
        ("container" = String, Path, description = "Container name")
    ),
    responses(
        (status = 200, description = "Deleted, or the reason it was not", body = PathMessage),
        (status = 400, description = "Invalid account or container name")
    )
)]
pub async fn delete_container_handler(
    State(use_case): State<Arc<DeleteFolderUseCase>>,
    Path(params): Path<ContainerParams>,
) -> Result<IndentedJson<PathMessage>, ApiError> {
    let container = resolve(params)?;
    Ok(IndentedJson(use_case.execute(&container).await))
}
