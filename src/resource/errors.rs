//! # Resource Errors
//!
//! The externally visible failure taxonomy, mapped to HTTP in one place.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for resource operations
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Failures a resource operation can report.
///
/// Every fault is classified at the point of detection and returned to the
/// caller; nothing is logged-and-swallowed, nothing is retried.
#[derive(Debug, Clone, Error)]
pub enum ResourceError {
    /// Malformed or missing required input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Path and body identifiers disagree on replace
    #[error("identifier mismatch: path '{path}' vs body '{body}'")]
    IdentifierMismatch { path: String, body: String },

    /// No record at the identifier
    #[error("{0}")]
    NotFound(String),

    /// Caller-supplied identifier already exists
    #[error("{0}")]
    DuplicateKey(String),

    /// Optimistic check failed and the record still exists; never retried
    #[error("{0}")]
    ConcurrencyConflict(String),

    /// Unclassified store or infrastructure failure
    #[error("internal fault: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ResourceError::IdentifierMismatch { .. } => StatusCode::BAD_REQUEST,
            ResourceError::NotFound(_) => StatusCode::NOT_FOUND,
            ResourceError::DuplicateKey(_) => StatusCode::CONFLICT,
            ResourceError::ConcurrencyConflict(_) => StatusCode::CONFLICT,
            ResourceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the machine-readable taxonomy code
    pub fn code(&self) -> &'static str {
        match self {
            ResourceError::InvalidInput(_) => "INVALID_INPUT",
            ResourceError::IdentifierMismatch { .. } => "IDENTIFIER_MISMATCH",
            ResourceError::NotFound(_) => "NOT_FOUND",
            ResourceError::DuplicateKey(_) => "DUPLICATE_KEY",
            ResourceError::ConcurrencyConflict(_) => "CONCURRENCY_CONFLICT",
            ResourceError::Internal(_) => "INTERNAL_FAULT",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl From<&ResourceError> for ErrorResponse {
    fn from(err: &ResourceError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code(),
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
