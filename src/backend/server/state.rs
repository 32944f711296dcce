/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - the token service shared by the `authenticate` middleware
 * - the user, post and comment services (each with its own caches)
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract a single service
 * (`State<PostService>`) and the middleware to extract the token service
 * (`State<Arc<TokenService>>`) without taking the whole `AppState`.
 */

use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;

use crate::backend::auth::tokens::TokenService;
use crate::backend::cache::ExpiringCache;
use crate::backend::repository::{CommentRepository, PostRepository, UserRepository};
use crate::backend::services::{CommentService, PostService, UserService};

/// Application state shared by all handlers
///
/// Cloning is cheap; every field is a handle to shared data.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub users: UserService,
    pub posts: PostService,
    pub comments: CommentService,
}

impl AppState {
    /// Wire services on top of the given repositories
    ///
    /// Users and posts each get their own cache with lifetime `cache_ttl`.
    pub fn new(
        tokens: Arc<TokenService>,
        user_repository: Arc<dyn UserRepository>,
        post_repository: Arc<dyn PostRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        cache_ttl: Duration,
    ) -> Self {
        let users = UserService::new(user_repository, ExpiringCache::new(cache_ttl), tokens.clone());
        let posts = PostService::new(post_repository, ExpiringCache::new(cache_ttl));
        let comments = CommentService::new(comment_repository, posts.clone(), users.clone());

        Self {
            tokens,
            users,
            posts,
            comments,
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for PostService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for CommentService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.comments.clone()
    }
}
