use axum::{extract::{Query, State}, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::{SearchUsersQuery, UpdateUserRequest},
    responses::UserOut,
};
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

pub async fn get_me(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(UserOut::from(user))
}

pub async fn update_me(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.username.is_none() && payload.email.is_none() {
        return Err(AppError::Validation("No fields to update".into()));
    }

    let updated = state
        .user_repo
        .update_profile(&user.id, payload.username.as_deref(), payload.email.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(Json(UserOut::from(updated)))
}

pub async fn search_users(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(query): Query<SearchUsersQuery>,
) -> Result<impl IntoResponse, AppError> {
    if query.q.len() < 2 {
        return Err(AppError::Validation("Search query must be at least 2 characters".into()));
    }

    let users = state.user_repo.search_by_username(&query.q, 10).await?;
    let results: Vec<UserOut> = users.into_iter().map(UserOut::from).collect();

    Ok(Json(results))
}
