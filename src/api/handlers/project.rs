use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::{CreateProjectRequest, UpdateProjectRequest},
    responses::ProjectOut,
};
use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::parse_object_id;
use crate::domain::models::project::{Project, ProjectStatus};
use crate::domain::services::authorization::{authorize, ProjectAction};
use crate::error::AppError;
use crate::state::AppState;
use bson::DateTime;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let projects = state.project_repo.list_for_member(&user.id).await?;
    let results: Vec<ProjectOut> = projects.into_iter().map(ProjectOut::from).collect();

    Ok(Json(results))
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let organization_id = parse_object_id(&payload.organization_id, "organization")?;

    state
        .organization_repo
        .find_by_id(&organization_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization not found".into()))?;

    let mut project = Project::new(
        payload.name,
        payload.description,
        organization_id,
        user.id,
        payload.priority.unwrap_or_else(|| "medium".to_string()),
    );

    if let Some(val) = payload.start_date {
        project.start_date = Some(parse_calendar_date(&val, "start_date")?);
    }
    if let Some(val) = payload.end_date {
        project.end_date = Some(parse_calendar_date(&val, "end_date")?);
    }
    if let Some(val) = payload.tags {
        project.tags = val;
    }

    let created = state.project_repo.create(&project).await?;

    info!("Created project {} owned by {}", created.id, user.id);

    Ok(Json(ProjectOut::from(created)))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = parse_object_id(&id, "project")?;

    let project = state
        .project_repo
        .find_by_id(&project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    authorize(&project, &user.id, ProjectAction::View)?;

    Ok(Json(ProjectOut::from(project)))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = parse_object_id(&id, "project")?;

    let mut project = state
        .project_repo
        .find_by_id(&project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    authorize(&project, &user.id, ProjectAction::Update)?;

    if payload.name.is_none()
        && payload.description.is_none()
        && payload.status.is_none()
        && payload.priority.is_none()
        && payload.start_date.is_none()
        && payload.end_date.is_none()
        && payload.tags.is_none()
    {
        return Err(AppError::Validation("No fields to update".into()));
    }

    if let Some(val) = payload.name { project.name = val; }
    if let Some(val) = payload.description { project.description = Some(val); }
    if let Some(val) = payload.status {
        project.status = ProjectStatus::parse(&val)
            .ok_or_else(|| AppError::Validation("Invalid status".into()))?;
    }
    if let Some(val) = payload.priority { project.priority = val; }
    if let Some(val) = payload.start_date {
        project.start_date = Some(parse_calendar_date(&val, "start_date")?);
    }
    if let Some(val) = payload.end_date {
        project.end_date = Some(parse_calendar_date(&val, "end_date")?);
    }
    if let Some(val) = payload.tags { project.tags = val; }

    project.updated_at = DateTime::now();

    let updated = state.project_repo.update(&project).await?;

    Ok(Json(ProjectOut::from(updated)))
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = parse_object_id(&id, "project")?;

    let project = state
        .project_repo
        .find_by_id(&project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    authorize(&project, &user.id, ProjectAction::Delete)?;

    state.project_repo.delete(&project_id).await?;

    info!("Deleted project {}", project_id);

    Ok(Json(json!({ "status": "deleted" })))
}

fn parse_calendar_date(value: &str, field: &str) -> Result<DateTime, AppError> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {field}: expected YYYY-MM-DD")))?;

    Ok(DateTime::from_chrono(date.and_time(NaiveTime::MIN).and_utc()))
}
