/**
 * Registration Handler
 *
 * POST /auth/register
 *
 * # Registration Process
 *
 * 1. Validate that username and password are present
 * 2. Hash password using bcrypt
 * 3. Store the user with the default role
 *
 * # Errors
 *
 * * `400 Bad Request` - empty username or password
 * * `409 Conflict` - username already taken
 * * `500 Internal Server Error` - hashing or storage failure
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::backend::error::{BackendError, JsonBody};
use crate::backend::services::UserService;

/// Registration handler
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "correct horse"}
/// ```
pub async fn register(
    State(users): State<UserService>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let user = users.register(&request.username, &request.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("User {} registered successfully", user.username),
        }),
    ))
}
