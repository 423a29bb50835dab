//! Axum-specific error types and mappings.
//!
//! Store failures are translated to a fixed public vocabulary here. The
//! full error is logged and never placed in a response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use snipbox_core::{RepositoryError, SnippetError};
use thiserror::Error;

/// Body for malformed JSON requests.
pub const INVALID_BODY: &str = "Invalid request body";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input or failed store operation).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No authenticated caller.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Missing, private, or not owned by the caller.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Method not routed for this path.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl HttpError {
    /// Translate a store failure into `status` with its public message.
    pub fn from_store(err: &RepositoryError, status: StatusCode) -> Self {
        tracing::error!(error = %err, detail = ?err, "Store operation failed");

        let message = err.public_message().to_string();
        match status {
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::INTERNAL_SERVER_ERROR => Self::Internal(message),
            _ => Self::BadRequest(message),
        }
    }

    /// Mapping for single-snippet reads, where store failures answer 404.
    pub fn from_read(err: SnippetError) -> Self {
        match err {
            SnippetError::Repository(repo_err) => Self::from_store(&repo_err, StatusCode::NOT_FOUND),
            other => other.into(),
        }
    }
}

impl From<SnippetError> for HttpError {
    fn from(err: SnippetError) -> Self {
        match err {
            SnippetError::Unauthenticated => Self::Unauthorized(err.to_string()),
            SnippetError::NotAccessible | SnippetError::NotOwned => Self::NotFound(err.to_string()),
            SnippetError::Validation(msg) => Self::BadRequest(msg.to_string()),
            SnippetError::Repository(repo_err) => {
                Self::from_store(&repo_err, StatusCode::BAD_REQUEST)
            }
        }
    }
}
