use axum::{extract::State, response::IntoResponse, Form, Json};
use crate::api::dtos::requests::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    if state.user_repo.find_by_username(&payload.username).await?.is_some() {
        return Err(AppError::Conflict("Username already taken".into()));
    }

    let password_hash = state.auth_service.hash_password(&payload.password)?;
    let user = User::new(payload.username, payload.email, password_hash);
    let created = state.user_repo.create(&user).await?;

    info!("Registered user: {}", created.id);

    Ok(Json(state.auth_service.issue_pair(&created.id)?))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(payload): Form<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Username first, email as fallback. Both the no-user and bad-password
    // paths return the same Unauthorized so account existence is not leaked.
    let user = match state.user_repo.find_by_username(&payload.username).await? {
        Some(user) => Some(user),
        None => state.user_repo.find_by_email(&payload.username).await?,
    };

    let user = user.ok_or(AppError::Unauthorized)?;

    if !state.auth_service.verify_password(&payload.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    // Best-effort: a failed timestamp write must not fail the login.
    if let Err(e) = state.user_repo.record_login(&user.id).await {
        warn!("Failed to record last login for {}: {:?}", user.id, e);
    }

    info!("User logged in: {}", user.id);

    Ok(Json(state.auth_service.issue_pair(&user.id)?))
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RefreshRequest>,
) -> Result<impl IntoResponse, AppError> {
    let pair = state.auth_service.refresh(&payload.refresh_token)?;
    Ok(Json(pair))
}

pub async fn logout() -> impl IntoResponse {
    // Stateless tokens: nothing to revoke server-side.
    Json(json!({ "message": "Logged out successfully" }))
}
