/**
 * Login Handler
 *
 * POST /auth/login
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a token carrying username and role
 *
 * # Security
 *
 * - Unknown user and wrong password both return 401 with the same body
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::error::{BackendError, JsonBody};
use crate::backend::services::UserService;

/// Login handler
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(users): State<UserService>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.username);

    let token = users.authenticate(&request.username, &request.password).await?;
    Ok(Json(LoginResponse { token }))
}
