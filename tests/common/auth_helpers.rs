//! Authentication test helpers
//!
//! Utilities for creating test users and tokens.

use axum::http::StatusCode;
use serde_json::json;

use blogd::backend::auth::credentials::hash_password;
use blogd::backend::auth::identity::{Identity, ADMIN_ROLE};
use blogd::backend::repository::UserRepository;
use blogd::shared::models::User;

use crate::common::app::TestApp;

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Register `username` through the API and log in, returning the token
pub async fn register_and_login(app: &TestApp, username: &str, password: &str) -> String {
    let credentials = json!({ "username": username, "password": password });

    let (status, body) = app.post("/auth/register", None, credentials.clone()).await;
    assert_eq!(status, StatusCode::CREATED, "register {}: {}", username, body);

    login(app, username, password).await
}

/// Log in through the API, returning the token
pub async fn login(app: &TestApp, username: &str, password: &str) -> String {
    let credentials = json!({ "username": username, "password": password });
    let (status, body) = app.post("/auth/login", None, credentials).await;
    assert_eq!(status, StatusCode::OK, "login {}: {}", username, body);

    body["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}

/// Store an administrator directly; registration never grants the admin role
pub async fn seed_admin(app: &TestApp, username: &str, password: &str) {
    let user = User {
        id: uuid::Uuid::new_v4(),
        username: username.to_string(),
        password_hash: hash_password(password).expect("hash password"),
        role: ADMIN_ROLE.to_string(),
    };
    app.store.create_user(user).await.expect("seed admin");
}

/// Mint a token without going through login
pub fn token_for(app: &TestApp, username: &str, role: &str) -> String {
    app.tokens
        .issue_token(&Identity::new(username, role))
        .expect("issue token")
}
