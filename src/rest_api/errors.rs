//! # REST API Errors
//!
//! Boundary-layer error type. Validation failures are produced here,
//! before a request ever reaches the service; they render as the same
//! envelope shape as every other outcome.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::application::ServiceResponse;

/// Result type for boundary operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// REST boundary errors.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input, caught before reaching the core.
    #[error("{0}")]
    Validation(String),

    /// Request body could not be interpreted.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status classification for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope: ServiceResponse<()> =
            ServiceResponse::failure(self.to_string(), status.as_u16());
        (status, Json(envelope)).into_response()
    }
}
