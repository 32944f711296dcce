//! blogd - Blog Backend
//!
//! A blog HTTP service with registration, login, posts and comments.
//!
//! # Module Structure
//!
//! - **`shared`** - domain records and shared error types
//! - **`backend`** - the Axum server, its middleware, services and storage
//!
//! # Security Core
//!
//! - `backend::cache::ExpiringCache` - TTL cache in front of user and post lookups
//! - `backend::auth::credentials` - bcrypt password hashing
//! - `backend::auth::tokens` - HS256 tokens valid for 12 hours
//! - `backend::middleware` - `authenticate` and owner-or-admin authorization
//!
//! # Usage
//!
//! ```rust,no_run
//! use blogd::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
