use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::{CreateTaskRequest, UpdateTaskRequest},
    responses::TaskOut,
};
use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::parse_object_id;
use crate::domain::models::notification::Notification;
use crate::domain::models::project::{Project, ProjectProgress};
use crate::domain::models::task::{Task, TASK_STATUSES};
use crate::domain::services::authorization::{authorize, ProjectAction};
use crate::error::AppError;
use crate::state::AppState;
use bson::oid::ObjectId;
use bson::DateTime;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

async fn member_project(
    state: &AppState,
    project_id: &ObjectId,
    user_id: &ObjectId,
) -> Result<Project, AppError> {
    let project = state
        .project_repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    authorize(&project, user_id, ProjectAction::View)?;
    Ok(project)
}

fn validate_status(status: &str) -> Result<(), AppError> {
    if TASK_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(AppError::Validation("Invalid status".into()))
    }
}

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = parse_object_id(&id, "project")?;
    member_project(&state, &project_id, &user.id).await?;

    let tasks = state.task_repo.list_by_project(&project_id).await?;
    let results: Vec<TaskOut> = tasks.into_iter().map(TaskOut::from).collect();

    Ok(Json(results))
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let project_id = parse_object_id(&id, "project")?;
    member_project(&state, &project_id, &user.id).await?;

    let status = payload.status.unwrap_or_else(|| "pending".to_string());
    validate_status(&status)?;

    let assignee_id = payload
        .assignee_id
        .as_deref()
        .map(|a| parse_object_id(a, "assignee"))
        .transpose()?;

    let task = Task::new(payload.title, payload.description, status, project_id, user.id, assignee_id);
    let created = state.task_repo.create(&task).await?;

    info!("Created task {} in project {}", created.id, project_id);

    if let Some(assignee) = created.assignee_id {
        notify_assignment(&state, &created.title, assignee).await;
    }

    refresh_project_progress(&state, &project_id).await;

    Ok(Json(TaskOut::from(created)))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let task_id = parse_object_id(&id, "task")?;

    let task = state
        .task_repo
        .find_by_id(&task_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    member_project(&state, &task.project_id, &user.id).await?;

    Ok(Json(TaskOut::from(task)))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task_id = parse_object_id(&id, "task")?;

    let mut task = state
        .task_repo
        .find_by_id(&task_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    member_project(&state, &task.project_id, &user.id).await?;

    let previous_assignee = task.assignee_id;

    if let Some(val) = payload.title { task.title = val; }
    if let Some(val) = payload.description { task.description = Some(val); }
    if let Some(val) = payload.status {
        validate_status(&val)?;
        task.status = val;
    }
    if let Some(val) = payload.assignee_id {
        task.assignee_id = Some(parse_object_id(&val, "assignee")?);
    }

    task.updated_at = DateTime::now();

    let updated = state.task_repo.update(&task).await?;

    if let Some(assignee) = updated.assignee_id {
        if previous_assignee != Some(assignee) {
            notify_assignment(&state, &updated.title, assignee).await;
        }
    }

    refresh_project_progress(&state, &updated.project_id).await;

    Ok(Json(TaskOut::from(updated)))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let task_id = parse_object_id(&id, "task")?;

    let task = state
        .task_repo
        .find_by_id(&task_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    member_project(&state, &task.project_id, &user.id).await?;

    state.task_repo.delete(&task_id).await?;

    refresh_project_progress(&state, &task.project_id).await;

    Ok(Json(json!({ "status": "deleted" })))
}

/// Fire-and-forget: the notification sender's failures never reach the
/// caller of the triggering operation.
async fn notify_assignment(state: &AppState, task_title: &str, recipient_id: ObjectId) {
    let notification = Notification::new(
        recipient_id,
        "task_assigned".to_string(),
        "New task assignment".to_string(),
        format!("You have been assigned to task '{task_title}'"),
    );

    if let Err(e) = state.notification_repo.create(&notification).await {
        error!("Failed to enqueue assignment notification: {:?}", e);
    }
}

/// Best-effort recount of the owning project's progress summary.
async fn refresh_project_progress(state: &AppState, project_id: &ObjectId) {
    let result = async {
        let total = state.task_repo.count_by_project(project_id, None).await?;
        let completed = state.task_repo.count_by_project(project_id, Some("completed")).await?;

        let completion = if total > 0 {
            (completed as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        let progress = ProjectProgress {
            completion,
            total_tasks: total,
            completed_tasks: completed,
        };
        state.project_repo.update_progress(project_id, &progress).await
    }
    .await;

    if let Err(e) = result {
        error!("Failed to refresh progress for project {}: {:?}", project_id, e);
    }
}
