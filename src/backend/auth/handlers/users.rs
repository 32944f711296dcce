/**
 * User Listing Handler
 *
 * GET /auth/users
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::BackendError;
use crate::backend::services::UserService;

pub async fn list_users(
    State(users): State<UserService>,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    let users = users.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
