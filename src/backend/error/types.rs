/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers. Every
 * variant maps to a status code and a client-safe message.
 *
 * # Error Categories
 *
 * - `HandlerError` - explicit status + message chosen by a handler or
 *   middleware (validation, authentication, authorization)
 * - `RepositoryError` - storage failures; the database cause is logged but
 *   never echoed to the client
 * - `SharedError` - validation failures
 * - `BodyRejected` - request body that could not be read as the expected
 *   JSON; keeps the status axum chose for the rejection
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::repository::RepositoryError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::extract::rejection::JsonRejection;
/// use axum::http::StatusCode;
/// use blogd::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid post ID");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request, authentication failure)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Storage error
    #[error(transparent)]
    RepositoryError(#[from] RepositoryError),

    /// Shared error (validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Malformed, mistyped or missing JSON request body
    #[error(transparent)]
    BodyRejected(#[from] JsonRejection),
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message shown to the client
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Shorthand for a 500 with a fixed client message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `RepositoryError` - 404 not found, 409 conflict, 400 invalid id,
    ///   500 database failure
    /// - `SharedError` - 400 Bad Request
    /// - `BodyRejected` - the rejection's own status (400, 415 or 422)
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::RepositoryError(err) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                RepositoryError::InvalidId(_) => StatusCode::BAD_REQUEST,
                RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::BodyRejected(rejection) => rejection.status(),
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::RepositoryError(RepositoryError::Database(_)) => {
                "Internal server error".to_string()
            }
            Self::RepositoryError(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::BodyRejected(rejection) => rejection.body_text(),
        }
    }
}
