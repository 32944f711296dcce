//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and global layers
//! ├── auth_routes.rs  - Public /auth endpoints
//! ├── docs_routes.rs  - Public /swagger API documentation
//! └── api_routes.rs   - Authenticated /api endpoints
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /auth/register` - User registration
//! - `POST /auth/login` - User login
//! - `GET /auth/users` - List users
//! - `GET /health` - Liveness probe
//! - `GET /swagger`, `GET /swagger/openapi.json` - API documentation
//!
//! ## Authenticated (`/api`)
//!
//! - `POST|GET /api/posts`, `GET /api/posts/{id}`
//! - `PATCH|DELETE /api/posts/{id}` - owner or admin
//! - `POST|GET /api/posts/{id}/comments`, `GET /api/comments`
//! - `PATCH|DELETE /api/comments/{id}` - owner or admin

/// Main router creation
pub mod router;

/// Public authentication routes
pub mod auth_routes;

/// Authenticated API routes
pub mod api_routes;

/// OpenAPI document and Swagger UI
pub mod docs_routes;

pub use router::create_router;
