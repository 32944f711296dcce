//! Authentication Module
//!
//! Password credentials, signed tokens and the identity they carry, plus the
//! public HTTP handlers for registration and login.
//!
//! # Architecture
//!
//! - **`credentials`** - bcrypt hashing and verification
//! - **`tokens`** - HS256 token issuance and verification (12 hour validity)
//! - **`identity`** - the `(username, role)` pair attached to a request
//! - **`handlers`** - HTTP handlers for `/auth/*`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Password hashing
//! ├── tokens.rs       - Token service and claims
//! ├── identity.rs     - Request identity and roles
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── users.rs    - User listing handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → password hashed → user stored with role `user`
//! 2. **Login**: username and password → credentials verified → token returned
//! 3. **Request**: `Authorization: Bearer <token>` → token verified → identity attached
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless and expire after 12 hours
//! - Invalid credentials return 401 without saying which part was wrong

/// Password hashing and verification
pub mod credentials;

/// Token issuance and verification
pub mod tokens;

/// Request identity
pub mod identity;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::{hash_password, verify_password, CredentialError};
pub use handlers::{list_users, login, register};
pub use identity::Identity;
pub use tokens::{Claims, TokenError, TokenService, TOKEN_VALIDITY};
