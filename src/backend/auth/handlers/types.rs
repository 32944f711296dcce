/**
 * Authentication Handler Types
 *
 * Request and response bodies for the `/auth` handlers.
 */

use serde::{Deserialize, Serialize};

use crate::shared::models::User;

/// Registration request
///
/// Any `role` sent by the client is ignored; new users always get the
/// default role.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    /// Plaintext password (hashed before storage, never logged)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carrying the signed token
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

/// Plain acknowledgement
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// User as shown to clients (no password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            role: user.role,
        }
    }
}
