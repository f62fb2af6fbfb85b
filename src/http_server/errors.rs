//! # HTTP API Errors
//!
//! The service has no domain error taxonomy: anything that goes wrong past
//! extractor binding is a database-level failure and renders as an opaque
//! 500. The underlying error is logged, never sent to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::queries::QueryError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Propagated database failure (connectivity, constraint violation)
    #[error("{0}")]
    Query(#[from] QueryError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!(error = %self, "request failed");

        let body = Json(ErrorResponse {
            error: "internal server error".to_string(),
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}
