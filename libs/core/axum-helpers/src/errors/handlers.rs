use axum::{http::StatusCode, response::Response};

use super::ErrorResponse;
use crate::response::json_response;

pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found";

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    json_response(StatusCode::NOT_FOUND, &ErrorResponse::new(NOT_FOUND_MESSAGE))
}
