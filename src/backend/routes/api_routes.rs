/**
 * API Routes
 *
 * Everything under `/api` requires a valid token. The `authenticate`
 * middleware is attached with `route_layer`, so unknown paths still fall
 * through to the 404 handler instead of answering 401.
 *
 * Mutations of an existing post or comment additionally pass through the
 * owner-or-admin guard, using `PostService` or `CommentService` as the
 * owner lookup. `GET /api/posts/{id}` is open to any authenticated user.
 */

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::backend::blog::{comments, posts};
use crate::backend::middleware::{authenticate, authorize_owner_or_admin, OwnerGuard};
use crate::backend::server::state::AppState;

/// Build the `/api` router (to be nested under `/api`)
pub fn configure_api_routes(state: &AppState) -> Router<AppState> {
    let post_guard = OwnerGuard::new(Arc::new(state.posts.clone()), "id");
    let comment_guard = OwnerGuard::new(Arc::new(state.comments.clone()), "id");

    let post_mutations = patch(posts::update_post)
        .delete(posts::delete_post)
        .route_layer(middleware::from_fn_with_state(post_guard, authorize_owner_or_admin));

    let comment_mutations = patch(comments::update_comment)
        .delete(comments::delete_comment)
        .route_layer(middleware::from_fn_with_state(comment_guard, authorize_owner_or_admin));

    Router::new()
        .route("/posts", post(posts::create_post).get(posts::list_posts))
        .route("/posts/{id}", get(posts::get_post).merge(post_mutations))
        .route(
            "/posts/{id}/comments",
            post(comments::add_comment).get(comments::list_comments_for_post),
        )
        .route("/comments", get(comments::list_comments))
        .route("/comments/{id}", comment_mutations)
        .route_layer(middleware::from_fn_with_state(state.tokens.clone(), authenticate))
}
