/**
 * Owner-or-Admin Authorization
 *
 * Second authorization stage for mutation routes. It runs after
 * [`authenticate`](super::auth::authenticate) and lets a request through when
 * the caller is an admin or owns the targeted resource.
 *
 * The guard is not tied to a resource type. It takes any
 * [`ResourceOwnerLookup`] capability ("given an id, who owns it?") and the
 * name of the path parameter that carries the id, so posts and comments use
 * the same middleware with different lookups.
 *
 * # Decision
 *
 * 1. No identity in request extensions → 401
 * 2. Role `Admin` → allow, without touching the lookup
 * 3. Lookup fails for any reason → 500 "resource lookup failed"
 * 4. Owner differs from the caller's username → 403
 * 5. Otherwise allow
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use thiserror::Error;

use crate::backend::auth::identity::Identity;
use crate::backend::middleware::auth::AuthError;

/// Failure to resolve the owner of a resource
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("resource '{0}' not found")]
    NotFound(String),

    #[error("resource lookup failed: {0}")]
    Backend(String),
}

/// Capability to resolve the owner of a resource by id
#[async_trait]
pub trait ResourceOwnerLookup: Send + Sync {
    /// Return the username that owns `resource_id`
    async fn owner_of(&self, resource_id: &str) -> Result<String, LookupError>;
}

/// Run the owner-or-admin decision for one request
pub async fn check_owner_or_admin(
    identity: Option<&Identity>,
    resource_id: &str,
    lookup: &dyn ResourceOwnerLookup,
) -> Result<(), AuthError> {
    let identity = identity.ok_or_else(|| {
        tracing::warn!("Owner check reached without an authenticated identity");
        AuthError::Unauthorized("missing or invalid token")
    })?;

    if identity.is_admin() {
        tracing::debug!("Admin access granted to {}", identity.username);
        return Ok(());
    }

    let owner = lookup.owner_of(resource_id).await.map_err(|e| {
        tracing::error!("Unable to resolve owner of {}: {}", resource_id, e);
        AuthError::InternalError("resource lookup failed")
    })?;

    if owner != identity.username {
        tracing::warn!(
            "User {} does not have permission to modify {}",
            identity.username,
            resource_id
        );
        return Err(AuthError::Forbidden);
    }

    tracing::debug!("User {} granted access to {}", identity.username, resource_id);
    Ok(())
}

/// Middleware state: the lookup capability plus the path parameter holding the id
#[derive(Clone)]
pub struct OwnerGuard {
    lookup: Arc<dyn ResourceOwnerLookup>,
    id_param: &'static str,
}

impl OwnerGuard {
    pub fn new(lookup: Arc<dyn ResourceOwnerLookup>, id_param: &'static str) -> Self {
        Self { lookup, id_param }
    }
}

impl fmt::Debug for OwnerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerGuard")
            .field("id_param", &self.id_param)
            .finish_non_exhaustive()
    }
}

/// Owner-or-admin middleware
///
/// Attach with `route_layer(from_fn_with_state(OwnerGuard::new(lookup, "id"),
/// authorize_owner_or_admin))` so that path parameters are already resolved.
pub async fn authorize_owner_or_admin(
    State(guard): State<OwnerGuard>,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let resource_id = params.get(guard.id_param).ok_or_else(|| {
        tracing::error!("Route has no '{}' path parameter", guard.id_param);
        AuthError::InternalError("resource lookup failed")
    })?;

    check_owner_or_admin(
        request.extensions().get::<Identity>(),
        resource_id,
        guard.lookup.as_ref(),
    )
    .await?;

    Ok(next.run(request).await)
}
