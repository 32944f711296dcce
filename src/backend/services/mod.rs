//! Service Layer
//!
//! Business logic between the HTTP handlers and the repositories:
//! read-through caching, password hashing, token issuance and the
//! owner lookups used by the authorization middleware.
//!
//! # Architecture
//!
//! - **`users`** - registration, login, cached user lookups
//! - **`posts`** - post CRUD with a cached `get`; owner lookup for posts
//! - **`comments`** - comment CRUD; owner lookup for comments
//!
//! Services are cheap to clone (`Arc` handles inside) and are constructed
//! once in `server::init`.

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::credentials::CredentialError;
use crate::backend::auth::tokens::TokenError;
use crate::backend::error::BackendError;
use crate::backend::middleware::LookupError;
use crate::backend::repository::RepositoryError;
use crate::shared::SharedError;

pub mod comments;
pub mod posts;
pub mod users;

pub use comments::CommentService;
pub use posts::PostService;
pub use users::UserService;

/// Errors returned by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Validation(#[from] SharedError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Unknown username or wrong password; the two are not distinguished
    #[error("invalid username or password")]
    InvalidCredentials,

    /// A blocking hashing task panicked or was cancelled
    #[error("background task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl From<ServiceError> for BackendError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repository(e) => BackendError::RepositoryError(e),
            ServiceError::Validation(e) => BackendError::SharedError(e),
            ServiceError::InvalidCredentials => {
                BackendError::handler(StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            ServiceError::Credential(CredentialError::HashingFailed(
                bcrypt::BcryptError::Truncation(_),
            )) => BackendError::handler(StatusCode::BAD_REQUEST, "Password is too long"),
            ServiceError::Credential(e) => {
                tracing::error!("Credential failure: {}", e);
                BackendError::internal("Failed to process password")
            }
            ServiceError::Token(e) => {
                tracing::error!("Token failure: {}", e);
                BackendError::internal("Failed to generate token")
            }
            ServiceError::Blocking(e) => {
                tracing::error!("Blocking task failed: {}", e);
                BackendError::internal("Internal server error")
            }
        }
    }
}

impl ServiceError {
    /// Convert into an owner-lookup failure for the authorization middleware
    pub(crate) fn into_lookup_error(self, resource_id: &str) -> LookupError {
        match self {
            ServiceError::Repository(RepositoryError::NotFound) => {
                LookupError::NotFound(resource_id.to_string())
            }
            other => LookupError::Backend(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_is_unauthorized() {
        let err: BackendError = ServiceError::InvalidCredentials.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Invalid username or password");
    }

    #[test]
    fn test_token_failure_is_internal() {
        let err: BackendError = ServiceError::Token(TokenError::SigningKeyUnavailable).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_overlong_password_is_bad_request() {
        let hashing = crate::backend::auth::credentials::hash_password(&"x".repeat(100)).unwrap_err();
        let err: BackendError = ServiceError::Credential(hashing).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_lookup_error_mapping() {
        let not_found = ServiceError::Repository(RepositoryError::NotFound).into_lookup_error("p1");
        assert!(matches!(not_found, LookupError::NotFound(id) if id == "p1"));

        let invalid = ServiceError::Repository(RepositoryError::InvalidId("x".into())).into_lookup_error("x");
        assert!(matches!(invalid, LookupError::Backend(_)));
    }
}
