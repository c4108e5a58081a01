//! Application error type mapping to HTTP status codes and the `{"error"}` body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use parlance_types::error::ExchangeError;

/// Application-level error that maps to HTTP responses.
///
/// Every variant renders as `{"error": "..."}` so clients only ever have to
/// look at one field.
#[derive(Debug)]
pub enum ApiError {
    /// Unusable request input.
    InvalidInput(String),
    /// Generic internal error.
    Internal(String),
}

impl From<ExchangeError> for ApiError {
    fn from(e: ExchangeError) -> Self {
        match e {
            ExchangeError::EmptyContent => {
                ApiError::InvalidInput("Message content required".to_string())
            }
            ExchangeError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Axum would answer 422 for a body that parses but has the wrong
        // shape; collapse everything to a plain 400 instead.
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                // Internal detail goes to the log, not the client.
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
