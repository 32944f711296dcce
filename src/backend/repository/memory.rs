/**
 * In-Memory Repositories
 *
 * A document store kept in process memory. Used when `DATABASE_URL` is not
 * configured and by the test suite. Contents are lost on restart.
 *
 * # Thread Safety
 *
 * Each collection sits behind its own `tokio::sync::RwLock`. No lock is held
 * across calls into other collections.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::repository::{CommentRepository, PostRepository, RepositoryError, UserRepository};
use crate::shared::models::{Comment, Post, PostChanges, User};

/// In-memory users, posts and comments
///
/// Cloning is cheap; clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
    comments: Arc<RwLock<HashMap<Uuid, Comment>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.username == user.username) {
            return Err(RepositoryError::Conflict(format!(
                "username '{}' already exists",
                user.username
            )));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create_post(&self, post: Post) -> Result<Post, RepositoryError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, RepositoryError> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(posts)
    }

    async fn get_post_by_id(&self, id: Uuid) -> Result<Option<Post>, RepositoryError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn update_post(&self, id: Uuid, changes: &PostChanges) -> Result<Post, RepositoryError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        changes.apply(post);
        Ok(post.clone())
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let removed = self.posts.write().await.remove(&id).is_some();
        if removed {
            // Mirrors the ON DELETE CASCADE of the SQL schema.
            self.comments.write().await.retain(|_, c| c.post_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn add_comment(&self, comment: Comment) -> Result<Comment, RepositoryError> {
        self.comments.write().await.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn list_comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepositoryError> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, RepositoryError> {
        let mut comments: Vec<Comment> = self.comments.read().await.values().cloned().collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn get_comment_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepositoryError> {
        Ok(self.comments.read().await.get(&id).cloned())
    }

    async fn update_comment(&self, id: Uuid, content: &str) -> Result<Comment, RepositoryError> {
        let mut comments = self.comments.write().await;
        let comment = comments.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        comment.content = content.to_string();
        Ok(comment.clone())
    }

    async fn delete_comment(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.comments.write().await.remove(&id).is_some())
    }
}
