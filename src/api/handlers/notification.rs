use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::responses::NotificationOut;
use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::parse_object_id;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;

pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let notifications = state.notification_repo.list_for_recipient(&user.id).await?;
    let results: Vec<NotificationOut> = notifications.into_iter().map(NotificationOut::from).collect();

    Ok(Json(results))
}

pub async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let notification_id = parse_object_id(&id, "notification")?;

    if !state.notification_repo.mark_read(&notification_id, &user.id).await? {
        return Err(AppError::NotFound("Notification not found".into()));
    }

    Ok(Json(json!({ "status": "read" })))
}
