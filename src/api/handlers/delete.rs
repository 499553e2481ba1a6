use axum::extract::{Path, State};
use std::sync::Arc;

use super::params::{resolve, ObjectParams};
use crate::api::encoder::IndentedJson;
use crate::api::errors::ApiError;
use crate::application::dto::PathMessage;
use crate::application::use_cases::DeleteObjectUseCase;

/// DELETE /api/{version}/accounts/{account}/containers/{container}/buckets/{bucket}
#[utoipa::path(
    delete,
    path = "/api/{version}/accounts/{account}/containers/{container}/buckets/{bucket}",
    tag = "objects",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name"),
        ("container" = String, Path, description = "Container name"),
        ("bucket" = String, Path, description = "Object name")
    ),
    responses(
        (status = 200, description = "Deleted, or the reason it was not", body = PathMessage),
        (status = 400, description = "Invalid name")
    )
)]
pub async fn delete_handler(
    State(use_case): State<Arc<DeleteObjectUseCase>>,
    Path(params): Path<ObjectParams>,
) -> Result<IndentedJson<PathMessage>, ApiError> {
    let object = resolve(params)?;
    Ok(IndentedJson(use_case.execute(&object).await))
}
