//! Repository Module
//!
//! Storage boundary of the backend. Each trait is a thin CRUD pass-through
//! over the document store; the service layer owns all policy (caching,
//! hashing, authorization).
//!
//! # Architecture
//!
//! - **`postgres`** - sqlx/PostgreSQL implementation used in production
//! - **`memory`** - in-process implementation used in development mode and
//!   in tests
//!
//! # Module Structure
//!
//! ```text
//! repository/
//! ├── mod.rs       - Traits and error type
//! ├── postgres.rs  - PostgreSQL repositories
//! └── memory.rs    - In-memory repositories
//! ```

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::models::{Comment, Post, PostChanges, User};

/// PostgreSQL-backed repositories
pub mod postgres;

/// In-memory repositories
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors returned by repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with the requested key exists
    #[error("record not found")]
    NotFound,

    /// A unique constraint would be violated
    #[error("conflict: {0}")]
    Conflict(String),

    /// The supplied id is not a valid identifier
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// The database driver failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Parse an API-level id string into a record id
pub fn parse_id(raw: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(raw).map_err(|_| RepositoryError::InvalidId(raw.to_string()))
}

/// User storage
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `Conflict` if the username is taken
    async fn create_user(&self, user: User) -> Result<User, RepositoryError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    async fn list_users(&self) -> Result<Vec<User>, RepositoryError>;
}

/// Post storage
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, post: Post) -> Result<Post, RepositoryError>;
    async fn list_posts(&self) -> Result<Vec<Post>, RepositoryError>;
    async fn get_post_by_id(&self, id: Uuid) -> Result<Option<Post>, RepositoryError>;
    /// Apply `changes`; fails with `NotFound` if the post does not exist
    async fn update_post(&self, id: Uuid, changes: &PostChanges) -> Result<Post, RepositoryError>;
    /// Returns `false` if there was nothing to delete
    async fn delete_post(&self, id: Uuid) -> Result<bool, RepositoryError>;
}

/// Comment storage
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: Comment) -> Result<Comment, RepositoryError>;
    async fn list_comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepositoryError>;
    async fn list_comments(&self) -> Result<Vec<Comment>, RepositoryError>;
    async fn get_comment_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepositoryError>;
    /// Replace the content; fails with `NotFound` if the comment does not exist
    async fn update_comment(&self, id: Uuid, content: &str) -> Result<Comment, RepositoryError>;
    /// Returns `false` if there was nothing to delete
    async fn delete_comment(&self, id: Uuid) -> Result<bool, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert_matches!(parse_id("not-a-uuid"), Err(RepositoryError::InvalidId(raw)) if raw == "not-a-uuid");
    }
}
