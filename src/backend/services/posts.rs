/**
 * Post Service
 *
 * Post CRUD on top of `PostRepository`, with single-post reads served from
 * an `ExpiringCache<Post>` keyed by the post id.
 *
 * Updates overwrite the cached entry with the stored result. Deletes
 * invalidate the entry both before and after the row is removed, so readers
 * during the delete go to the store and a refill that lands mid-delete is
 * dropped. A reader that fetched the row before the delete and writes the
 * cache after it finishes can still repopulate the entry until its TTL
 * runs out.
 *
 * `PostService` also answers "who owns this post?" for the owner-or-admin
 * middleware: the owner is the author's username.
 */

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::backend::auth::identity::Identity;
use crate::backend::cache::ExpiringCache;
use crate::backend::middleware::{LookupError, ResourceOwnerLookup};
use crate::backend::repository::{parse_id, PostRepository, RepositoryError};
use crate::backend::services::ServiceError;
use crate::shared::models::{Post, PostChanges};
use crate::shared::SharedError;

#[derive(Clone)]
pub struct PostService {
    repository: Arc<dyn PostRepository>,
    cache: ExpiringCache<Post>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>, cache: ExpiringCache<Post>) -> Self {
        Self { repository, cache }
    }

    /// Create a post authored by `author`
    pub async fn create_post(
        &self,
        author: &Identity,
        title: &str,
        content: &str,
    ) -> Result<Post, ServiceError> {
        if title.trim().is_empty() {
            return Err(SharedError::validation("title", "Title must not be empty").into());
        }

        let post = Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            author_id: author.username.clone(),
            created_at: Utc::now(),
        };

        let post = self.repository.create_post(post).await?;
        tracing::info!("Post {} created by {}", post.id, post.author_id);
        Ok(post)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ServiceError> {
        Ok(self.repository.list_posts().await?)
    }

    /// Fetch one post, consulting the cache first
    pub async fn get_post(&self, id: &str) -> Result<Post, ServiceError> {
        let id = parse_id(id)?;
        let key = id.to_string();
        if let Some(post) = self.cache.get(&key) {
            tracing::debug!("Post cache hit: {}", key);
            return Ok(post);
        }

        let post = self
            .repository
            .get_post_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.cache.set(key, post.clone());
        Ok(post)
    }

    /// Apply a partial update
    ///
    /// Empty changes are rejected with a validation error rather than
    /// silently returning the unchanged post.
    pub async fn update_post(&self, id: &str, changes: PostChanges) -> Result<Post, ServiceError> {
        let id = parse_id(id)?;
        if changes.is_empty() {
            return Err(SharedError::validation("body", "Nothing to update").into());
        }

        let post = self.repository.update_post(id, &changes).await?;
        self.cache.set(id.to_string(), post.clone());
        tracing::info!("Post {} updated", id);
        Ok(post)
    }

    /// Delete a post and its comments
    pub async fn delete_post(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_id(id)?;
        let key = id.to_string();
        self.cache.invalidate(&key);
        let deleted = self.repository.delete_post(id).await;
        self.cache.invalidate(&key);
        let deleted = deleted?;

        if !deleted {
            return Err(RepositoryError::NotFound.into());
        }

        tracing::info!("Post {} deleted", id);
        Ok(())
    }
}

#[async_trait]
impl ResourceOwnerLookup for PostService {
    async fn owner_of(&self, resource_id: &str) -> Result<String, LookupError> {
        self.get_post(resource_id)
            .await
            .map(|post| post.author_id)
            .map_err(|e| e.into_lookup_error(resource_id))
    }
}
