/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the caller's identity to handlers.
 *
 * # Request Flow
 *
 * 1. Read the `Authorization` header; absent or empty → 401 "missing token"
 * 2. Strip a literal `Bearer ` prefix if present (exact, case-sensitive)
 * 3. Verify the token; any failure → 401 "invalid token"
 * 4. Insert the [`Identity`] into request extensions and call the next stage
 *
 * Token contents are never logged.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::auth::identity::Identity;
use crate::backend::auth::tokens::TokenService;
use crate::backend::error::BackendError;

const BEARER_PREFIX: &str = "Bearer ";

/// Authorization failures surfaced by the middleware stages
///
/// This is the only place where authentication and authorization outcomes
/// are turned into HTTP status codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No token, or a token that failed verification (401)
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Valid identity without sufficient privilege (403)
    #[error("you do not have permission to modify this resource")]
    Forbidden,

    /// A collaborator failed while making the decision (500)
    #[error("{0}")]
    InternalError(&'static str),
}

impl AuthError {
    pub const MISSING_TOKEN: Self = Self::Unauthorized("missing token");
    pub const INVALID_TOKEN: Self = Self::Unauthorized("invalid token");

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for BackendError {
    fn from(err: AuthError) -> Self {
        BackendError::handler(err.status_code(), err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        BackendError::from(self).into_response()
    }
}

/// Extract the raw token from the `Authorization` header
///
/// A missing, empty or non-UTF-8 header counts as missing. The `Bearer `
/// prefix is optional; anything else is passed through untouched and left
/// for token verification to reject.
pub fn extract_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MISSING_TOKEN)?;

    Ok(value.strip_prefix(BEARER_PREFIX).unwrap_or(value))
}

/// Resolve the identity behind a request's `Authorization` header
pub fn identify(tokens: &TokenService, headers: &HeaderMap) -> Result<Identity, AuthError> {
    let token = extract_token(headers).map_err(|e| {
        tracing::warn!("Missing Authorization header");
        e
    })?;

    let claims = tokens.verify_token(token).map_err(|_| {
        tracing::warn!("Rejected invalid token");
        AuthError::INVALID_TOKEN
    })?;

    Ok(claims.identity())
}

/// Authentication middleware
///
/// Attach with `axum::middleware::from_fn_with_state(tokens, authenticate)`.
/// On success the [`Identity`] is available to later stages and handlers
/// through request extensions (see [`AuthUser`]).
pub async fn authenticate(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = identify(&tokens, request.headers())?;
    tracing::debug!("Token valid for user: {}, role: {}", identity.username, identity.role);

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated identity
///
/// Reads the [`Identity`] placed in request extensions by [`authenticate`];
/// rejects with 401 when the route is not behind the middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("Identity not found in request extensions");
                AuthError::Unauthorized("missing or invalid token")
            })
    }
}
