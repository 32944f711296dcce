//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! ├── conversion.rs - IntoResponse implementation
//! └── rejection.rs  - JSON body extractor with backend-shaped rejections
//! ```
//!
//! Lower layers (cache, credentials, tokens, repositories) define their own
//! error enums and never mention HTTP. Translation into status codes happens
//! here and in the middleware's `AuthError`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub mod rejection;

pub use conversion::error_response;
pub use rejection::JsonBody;
pub use types::BackendError;
