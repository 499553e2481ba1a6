use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use tracing::debug;

use super::params::{resolve, ObjectParams};
use crate::api::errors::ApiError;
use crate::application::use_cases::DownloadObjectUseCase;

/// GET /api/{version}/accounts/{account}/containers/{container}/buckets/{bucket}
/// Stream object content
#[utoipa::path(
    get,
    path = "/api/{version}/accounts/{account}/containers/{container}/buckets/{bucket}",
    tag = "objects",
    params(
        ("version" = String, Path, description = "API version segment"),
        ("account" = String, Path, description = "Account name"),
        ("container" = String, Path, description = "Container name"),
        ("bucket" = String, Path, description = "Object name")
    ),
    responses(
        (status = 200, description = "Object content as application/octet-stream"),
        (status = 400, description = "Invalid name"),
        (status = 404, description = "Object not found")
    )
)]
pub async fn download_handler(
    State(use_case): State<Arc<DownloadObjectUseCase>>,
    Path(params): Path<ObjectParams>,
) -> Result<Response, ApiError> {
    let object = resolve(params)?;

    // Execute use case
    let (metadata, reader) = use_case.execute(&object).await?;
    debug!(path = %metadata.path, bytes = metadata.size_bytes, "Streaming object");

    // Convert reader to stream
    let stream = ReaderStream::new(reader);
    let body = Body::from_stream(stream);

    // Build response with headers
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_LENGTH, metadata.size_bytes.to_string())
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .body(body)
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
