/**
 * Comment Service
 *
 * Comment CRUD on top of `CommentRepository`. Adding a comment resolves the
 * commenter's user record through `UserService` and checks that the target
 * post exists through `PostService`.
 *
 * The owner of a comment, as seen by the owner-or-admin middleware, is the
 * commenter's username.
 */

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::backend::auth::identity::Identity;
use crate::backend::middleware::{LookupError, ResourceOwnerLookup};
use crate::backend::repository::{parse_id, CommentRepository, RepositoryError};
use crate::backend::services::{PostService, ServiceError, UserService};
use crate::shared::models::Comment;
use crate::shared::SharedError;

#[derive(Clone)]
pub struct CommentService {
    repository: Arc<dyn CommentRepository>,
    posts: PostService,
    users: UserService,
}

fn require_content(content: &str) -> Result<(), ServiceError> {
    if content.trim().is_empty() {
        return Err(SharedError::validation("content", "Comment must not be empty").into());
    }
    Ok(())
}

impl CommentService {
    pub fn new(repository: Arc<dyn CommentRepository>, posts: PostService, users: UserService) -> Self {
        Self {
            repository,
            posts,
            users,
        }
    }

    /// Add a comment by `author` to the post `post_id`
    ///
    /// # Errors
    /// * `Repository(NotFound)` - post or commenting user does not exist
    /// * `Validation` - empty content
    pub async fn add_comment(
        &self,
        post_id: &str,
        author: &Identity,
        content: &str,
    ) -> Result<Comment, ServiceError> {
        require_content(content)?;

        let post = self.posts.get_post(post_id).await?;
        let user = self.users.get_user_by_username(&author.username).await?;

        let comment = Comment {
            id: Uuid::new_v4(),
            post_id: post.id,
            user_id: user.id,
            username: user.username,
            content: content.to_string(),
            created_at: Utc::now(),
        };

        let comment = self.repository.add_comment(comment).await?;
        tracing::info!("Comment {} added to post {} by {}", comment.id, post.id, comment.username);
        Ok(comment)
    }

    pub async fn list_comments_for_post(&self, post_id: &str) -> Result<Vec<Comment>, ServiceError> {
        let post_id = parse_id(post_id)?;
        Ok(self.repository.list_comments_for_post(post_id).await?)
    }

    pub async fn list_comments(&self) -> Result<Vec<Comment>, ServiceError> {
        Ok(self.repository.list_comments().await?)
    }

    pub async fn get_comment(&self, id: &str) -> Result<Comment, ServiceError> {
        let id = parse_id(id)?;
        let comment = self
            .repository
            .get_comment_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        Ok(comment)
    }

    pub async fn update_comment(&self, id: &str, content: &str) -> Result<Comment, ServiceError> {
        let id = parse_id(id)?;
        require_content(content)?;

        let comment = self.repository.update_comment(id, content).await?;
        tracing::info!("Comment {} updated", id);
        Ok(comment)
    }

    pub async fn delete_comment(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        if !self.repository.delete_comment(id).await? {
            return Err(RepositoryError::NotFound.into());
        }

        tracing::info!("Comment {} deleted", id);
        Ok(())
    }
}

#[async_trait]
impl ResourceOwnerLookup for CommentService {
    async fn owner_of(&self, resource_id: &str) -> Result<String, LookupError> {
        self.get_comment(resource_id)
            .await
            .map(|comment| comment.username)
            .map_err(|e| e.into_lookup_error(resource_id))
    }
}
