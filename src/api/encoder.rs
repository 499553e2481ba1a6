use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::api::errors::ApiError;

/// JSON response indented with a single space per nesting level
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub T);

/// Serialize `value` with one-space indentation
pub fn to_indented_vec<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        match to_indented_vec(&self.0) {
            Ok(buf) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                buf,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode response");
                ApiError::internal_error(format!("Failed to encode response: {}", e))
                    .into_response()
            }
        }
    }
}
