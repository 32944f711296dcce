//! Backend Module
//!
//! All server-side code: an Axum HTTP server for a small blog with token
//! authentication and owner-or-admin authorization.
//!
//! # Architecture
//!
//! - **`cache`** - expiring key/value cache used by the services
//! - **`auth`** - password credentials, tokens, identity, `/auth` handlers
//! - **`middleware`** - `authenticate` and the owner-or-admin guard
//! - **`repository`** - storage traits with PostgreSQL and in-memory backends
//! - **`services`** - business logic on top of the repositories
//! - **`blog`** - `/api` handlers for posts and comments
//! - **`routes`** - router assembly
//! - **`server`** - configuration, state and initialization
//! - **`error`** - handler error type and JSON error responses
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── cache/          - Expiring cache
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── repository/     - Storage
//! ├── services/       - Business logic
//! ├── blog/           - Post and comment handlers
//! ├── routes/         - Route configuration
//! ├── server/         - Server initialization and state
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! request → TraceLayer → TimeoutLayer → router
//!         → authenticate (/api only) → owner guard (mutations only)
//!         → handler → service → cache / repository
//! ```

/// Expiring cache
pub mod cache;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Storage traits and implementations
pub mod repository;

/// Business logic
pub mod services;

/// Post and comment handlers
pub mod blog;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
