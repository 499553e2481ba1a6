use axum::extract::{multipart::MultipartRejection, Multipart, Path, State};
use std::sync::Arc;

use super::params::{resolve, ContainerParams, ObjectParams};
use crate::api::encoder::IndentedJson;
use crate::api::errors::ApiError;
use crate::api::multipart::collect_files;
use crate::application::dto::{PathMessage, UploadReport};
use crate::application::use_cases::{UploadObjectUseCase, UploadObjectsUseCase};

/// POST /api/{version}/accounts/{account}/containers/{container}/buckets/{bucket}
/// Upload exactly one `file` part to the named object
#[utoipa::path(
    post,
    path = "/api/{version}/accounts/{account}/containers/{container}/buckets/{bucket}",
    tag = "objects",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name"),
        ("container" = String, Path, description = "Container name"),
        ("bucket" = String, Path, description = "Object name")
    ),
    responses(
        (status = 200, description = "Uploaded, or the reason it was not", body = PathMessage),
        (status = 400, description = "Invalid name")
    )
)]
pub async fn upload_handler(
    State(use_case): State<Arc<UploadObjectUseCase>>,
    Path(params): Path<ObjectParams>,
    form: Result<Multipart, MultipartRejection>,
) -> Result<IndentedJson<PathMessage>, ApiError> {
    let object = resolve(params)?;
    let files = collect_files(form).await;
    Ok(IndentedJson(use_case.execute(&object, files).await))
}

/// PUT /api/{version}/accounts/{account}/containers/{container}
/// Upload every `file` part into the container under its own filename
#[utoipa::path(
    put,
    path = "/api/{version}/accounts/{account}/containers/{container}",
    tag = "objects",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name"),
        ("container" = String, Path, description = "Container name")
    ),
    responses(
        (status = 200, description = "Per-file upload report", body = UploadReport),
        (status = 400, description = "Invalid account or container name")
    )
)]
pub async fn upload_many_handler(
    State(use_case): State<Arc<UploadObjectsUseCase>>,
    Path(params): Path<ContainerParams>,
    form: Result<Multipart, MultipartRejection>,
) -> Result<IndentedJson<UploadReport>, ApiError> {
    let container = resolve(params)?;
    let files = collect_files(form).await;
    Ok(IndentedJson(use_case.execute(&container, files).await))
}
