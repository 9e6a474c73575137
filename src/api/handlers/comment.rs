use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::{CreateCommentRequest, UpdateCommentRequest},
    responses::CommentOut,
};
use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::parse_object_id;
use crate::domain::models::comment::Comment;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(task_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let task_id = parse_object_id(&task_id, "task")?;

    let comments = state.comment_repo.list_by_task(&task_id).await?;
    let results: Vec<CommentOut> = comments.into_iter().map(CommentOut::from).collect();

    Ok(Json(results))
}

pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task_id = parse_object_id(&task_id, "task")?;

    state
        .task_repo
        .find_by_id(&task_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    let comment = Comment::new(task_id, user.id, payload.content);
    let created = state.comment_repo.create(&comment).await?;

    Ok(Json(CommentOut::from(created)))
}

pub async fn edit_comment(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_object_id(&id, "comment")?;

    let updated = state
        .comment_repo
        .update_content(&comment_id, &payload.content)
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".into()))?;

    Ok(Json(CommentOut::from(updated)))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_object_id(&id, "comment")?;

    if !state.comment_repo.delete(&comment_id).await? {
        return Err(AppError::NotFound("Comment not found".into()));
    }

    Ok(Json(json!({ "message": "Comment deleted successfully" })))
}
