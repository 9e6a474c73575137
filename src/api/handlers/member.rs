use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::{requests::AddMemberRequest, responses::MemberOut};
use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::parse_object_id;
use crate::domain::models::project::{Member, MemberRole};
use crate::domain::services::authorization::{authorize, ProjectAction};
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn add_member(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<AddMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = parse_object_id(&id, "project")?;

    let project = state
        .project_repo
        .find_by_id(&project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    authorize(&project, &user.id, ProjectAction::AddMember)?;

    let target_id = parse_object_id(&payload.user_id, "user")?;
    let role = MemberRole::parse(&payload.role)
        .ok_or_else(|| AppError::Validation("Invalid role".into()))?;

    state
        .user_repo
        .find_by_id(&target_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if project.is_member(&target_id) {
        return Err(AppError::Conflict("User is already a project member".into()));
    }

    let member = Member::new(target_id, role);

    // The conditional push closes the window between the check above and the
    // write: a concurrent add for the same user resolves to this conflict.
    if !state.project_repo.add_member(&project_id, &member).await? {
        return Err(AppError::Conflict("User is already a project member".into()));
    }

    info!("Added member {} to project {} as {}", target_id, project_id, role.as_str());

    Ok(Json(MemberOut::from(&member)))
}

pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = parse_object_id(&id, "project")?;

    let project = state
        .project_repo
        .find_by_id(&project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    authorize(&project, &user.id, ProjectAction::RemoveMember)?;

    let target_id = parse_object_id(&user_id, "user")?;

    // Removal is idempotent: an absent member is not an error.
    state.project_repo.remove_member(&project_id, &target_id).await?;

    info!("Removed member {} from project {}", target_id, project_id);

    Ok(Json(json!({ "status": "removed" })))
}
