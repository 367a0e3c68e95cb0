//! API error types.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to API callers.
///
/// The prediction contract has exactly one failure class: a request body
/// that is not a well-formed `PredictionRequest`. Everything else succeeds
/// deterministically, so there is no internal-error variant.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body failed validation.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "error": {
                        "kind": "validation",
                        "message": message,
                    }
                })),
            )
                .into_response(),
        }
    }
}
