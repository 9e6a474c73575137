use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateOrganizationRequest, JoinOrganizationRequest};
use crate::api::handlers::parse_object_id;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::organization::Organization;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn create_organization(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateOrganizationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let organization = Organization::new(payload.name, user.id);
    let created = state.organization_repo.create(&organization).await?;

    // The creator joins their own organization immediately.
    state.user_repo.add_organization(&user.id, &created.id).await?;

    info!("Created organization {} for user {}", created.id, user.id);

    Ok(Json(json!({ "organization_id": created.id.to_hex() })))
}

pub async fn join_organization(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<JoinOrganizationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let organization_id = parse_object_id(&payload.organization_id, "organization")?;

    state
        .organization_repo
        .find_by_id(&organization_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization not found".into()))?;

    // Membership set semantics: joining twice is a no-op.
    state.user_repo.add_organization(&user.id, &organization_id).await?;

    Ok(Json(json!({ "status": "joined" })))
}
