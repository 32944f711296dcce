//! Shared Error Types
//!
//! This module defines error types that are not tied to a particular layer
//! of the backend. Today that is request validation.
//!
//! # Usage
//!
//! ```rust
//! use blogd::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "Username must not be empty");
//! ```
use thiserror::Error;

/// Errors shared by handlers and services
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
