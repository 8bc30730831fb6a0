use axum::{http::StatusCode, response::IntoResponse, response::Response};

use super::ErrorCode;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, ErrorCode::NotFound.default_message()).into_response()
}
