//! Blog Domain Records
//!
//! Users, posts and comments as they are stored and returned by the
//! repository layer. Ids are UUIDs and serialize as strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered user
///
/// `password_hash` is never serialized, so a `User` can be logged or cached
/// without leaking the hash through `serde`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: String,
}

/// Blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Username of the author; ownership checks compare against this
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

/// Comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    /// Username of the commenter; ownership checks compare against this
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update of a post; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    /// Build changes from request fields, treating empty strings as "unchanged"
    pub fn from_fields(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            content: content.filter(|c| !c.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Apply the changes to a post in place
    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
    }
}
