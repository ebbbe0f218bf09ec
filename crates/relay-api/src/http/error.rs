//! Application error type mapping relay failures to HTTP responses.
//!
//! The body is always one of two fixed strings. Provider detail is logged by
//! the relay and never reaches the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use relay_core::chat::relay::RelayError;
use relay_types::chat::ChatTurnResponse;
use relay_types::error::ValidationError;
use relay_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The request body was rejected before any model call.
    Validation(ValidationError),
    /// The model call failed.
    Provider(LlmError),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        match e {
            RelayError::Validation(e) => AppError::Validation(e),
            RelayError::Provider(e) => AppError::Provider(e),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, ChatTurnResponse::invalid_message()),
            AppError::Provider(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ChatTurnResponse::provider_failure(),
            ),
        };

        (status, Json(body)).into_response()
    }
}
