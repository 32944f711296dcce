//! Middleware Module
//!
//! This module contains the HTTP middleware that gates protected routes.
//!
//! # Architecture
//!
//! - **`auth`** - Token authentication; attaches the caller's identity
//! - **`ownership`** - Owner-or-admin authorization for mutation routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use blogd::backend::middleware::{authenticate, authorize_owner_or_admin, OwnerGuard};
//!
//! let guarded = Router::new()
//!     .route("/posts/{id}", delete(delete_post))
//!     .route_layer(from_fn_with_state(OwnerGuard::new(posts, "id"), authorize_owner_or_admin));
//! let api = guarded.route_layer(from_fn_with_state(tokens.clone(), authenticate));
//! ```

pub mod auth;
pub mod ownership;

pub use auth::{authenticate, extract_token, identify, AuthError, AuthUser};
pub use ownership::{
    authorize_owner_or_admin, check_owner_or_admin, LookupError, OwnerGuard, ResourceOwnerLookup,
};
