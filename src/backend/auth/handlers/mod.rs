//! Authentication Handlers Module
//!
//! HTTP handlers for the public `/auth` endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration
//! - **`login`** - POST /auth/login - User authentication
//! - **`list_users`** - GET /auth/users - Registered users without hashes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::{get, post}, Router};
//! use blogd::backend::auth::handlers::{list_users, login, register};
//! use blogd::backend::server::AppState;
//!
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route("/auth/register", post(register))
//!     .route("/auth/login", post(login))
//!     .route("/auth/users", get(list_users))
//!     .with_state(state);
//! # }
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// User listing handler
pub mod users;

pub use types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};

pub use login::login;
pub use register::register;
pub use users::list_users;
