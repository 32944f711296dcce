/**
 * Post Handlers
 *
 * - `POST /api/posts` - create a post authored by the caller
 * - `GET /api/posts` - list all posts
 * - `GET /api/posts/{id}` - fetch one post
 * - `PATCH /api/posts/{id}` - partial update (owner or admin)
 * - `DELETE /api/posts/{id}` - delete with comments (owner or admin)
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::blog::types::{CreatePostRequest, UpdatePostRequest};
use crate::backend::error::{BackendError, JsonBody};
use crate::backend::middleware::AuthUser;
use crate::backend::services::PostService;
use crate::shared::models::Post;

pub async fn create_post(
    State(posts): State<PostService>,
    AuthUser(identity): AuthUser,
    JsonBody(request): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), BackendError> {
    let post = posts
        .create_post(&identity, &request.title, &request.content)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn list_posts(State(posts): State<PostService>) -> Result<Json<Vec<Post>>, BackendError> {
    Ok(Json(posts.list_posts().await?))
}

pub async fn get_post(
    State(posts): State<PostService>,
    Path(id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    Ok(Json(posts.get_post(&id).await?))
}

pub async fn update_post(
    State(posts): State<PostService>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdatePostRequest>,
) -> Result<Json<Post>, BackendError> {
    Ok(Json(posts.update_post(&id, request.into_changes()).await?))
}

pub async fn delete_post(
    State(posts): State<PostService>,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    posts.delete_post(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
