use std::sync::Arc;
use crate::domain::ports::{
    CommentRepository, NotificationRepository, OrganizationRepository,
    ProjectRepository, TaskRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub organization_repo: Arc<dyn OrganizationRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub task_repo: Arc<dyn TaskRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub notification_repo: Arc<dyn NotificationRepository>,
    pub auth_service: Arc<AuthService>,
}
