//! Shared Module
//!
//! Domain records and error types used by every backend layer. Nothing in
//! here depends on HTTP.

/// Shared error types
pub mod error;

/// Users, posts and comments
pub mod models;

pub use error::SharedError;
pub use models::{Comment, Post, PostChanges, User};
