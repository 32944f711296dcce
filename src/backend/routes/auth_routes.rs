/**
 * Authentication Routes
 *
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 * - `GET /auth/users` - List users
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{list_users, login, register};
use crate::backend::server::state::AppState;

/// Add the public `/auth` routes to `router`
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/users", get(list_users))
}
