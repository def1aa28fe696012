use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Fallback for routes that do not exist.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
        ErrorCode::NotFound,
    )
}
