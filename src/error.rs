//! Error types for the lookup service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Lookup Error Enum ==
/// Failures of the remote guess API.
///
/// These never reach callers of `LookupService::lookup`; the service logs
/// them and reports the keyword as not found.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Connection failure, timeout or other transport error
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Remote API returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not valid JSON
    #[error("Invalid response body: {0}")]
    Decode(String),
}

// == Api Error Enum ==
/// Errors surfaced by the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Keyword not found; carries the user-facing reply
    #[error("{0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
