/**
 * Comment Handlers
 *
 * - `POST /api/posts/{id}/comments` - comment on a post as the caller
 * - `GET /api/posts/{id}/comments` - comments of one post
 * - `GET /api/comments` - all comments
 * - `PATCH /api/comments/{id}` - replace content (owner or admin)
 * - `DELETE /api/comments/{id}` - delete (owner or admin)
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::blog::types::{CreateCommentRequest, UpdateCommentRequest};
use crate::backend::error::{BackendError, JsonBody};
use crate::backend::middleware::AuthUser;
use crate::backend::services::CommentService;
use crate::shared::models::Comment;

pub async fn add_comment(
    State(comments): State<CommentService>,
    AuthUser(identity): AuthUser,
    Path(post_id): Path<String>,
    JsonBody(request): JsonBody<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), BackendError> {
    let comment = comments
        .add_comment(&post_id, &identity, &request.content)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn list_comments_for_post(
    State(comments): State<CommentService>,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    Ok(Json(comments.list_comments_for_post(&post_id).await?))
}

pub async fn list_comments(
    State(comments): State<CommentService>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    Ok(Json(comments.list_comments().await?))
}

pub async fn update_comment(
    State(comments): State<CommentService>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateCommentRequest>,
) -> Result<Json<Comment>, BackendError> {
    Ok(Json(comments.update_comment(&id, &request.content).await?))
}

pub async fn delete_comment(
    State(comments): State<CommentService>,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    comments.delete_comment(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
