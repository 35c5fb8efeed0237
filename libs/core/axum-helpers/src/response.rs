//! JSON response helper shared by handlers and error rendering.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body sent when a payload cannot be serialized.
pub const ENCODE_FAILURE_BODY: &str = r#"{"error":"Failed to encode response"}"#;

/// Confirmation body without an entity, e.g. after a deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Serializes `payload` as the body of a `status` response with
/// `Content-Type: application/json`.
///
/// A serialization failure is logged and turned into a 500 with
/// [`ENCODE_FAILURE_BODY`]; the intended status is not sent.
pub fn json_response<T>(status: StatusCode, payload: &T) -> Response
where
    T: Serialize + ?Sized,
{
    match serde_json::to_vec(payload) {
        Ok(body) => with_json_content_type(status, body),
        Err(e) => {
            tracing::error!(
                error = %e,
                intended_status = status.as_u16(),
                "Failed to encode response payload"
            );
            with_json_content_type(StatusCode::INTERNAL_SERVER_ERROR, ENCODE_FAILURE_BODY.as_bytes().to_vec())
        }
    }
}

fn with_json_content_type(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}
