use crate::domain::models::{
    comment::Comment, notification::Notification, organization::Organization,
    project::{Member, Project, ProjectProgress}, task::Task, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use bson::oid::ObjectId;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    /// Partial profile update; returns the updated document or None if the
    /// user no longer exists.
    async fn update_profile(
        &self,
        id: &ObjectId,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, AppError>;
    async fn record_login(&self, id: &ObjectId) -> Result<(), AppError>;
    /// Idempotent: adding an organization the user already belongs to is a no-op.
    async fn add_organization(&self, user_id: &ObjectId, organization_id: &ObjectId) -> Result<(), AppError>;
    async fn search_by_username(&self, query: &str, limit: i64) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn create(&self, organization: &Organization) -> Result<Organization, AppError>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Organization>, AppError>;
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: &Project) -> Result<Project, AppError>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Project>, AppError>;
    async fn list_for_member(&self, user_id: &ObjectId) -> Result<Vec<Project>, AppError>;
    async fn update(&self, project: &Project) -> Result<Project, AppError>;
    /// Conditional push: appends the member only if the user id is not yet in
    /// the list. Returns false when the entry was already present, so
    /// concurrent adds for the same user race safely to a conflict.
    async fn add_member(&self, project_id: &ObjectId, member: &Member) -> Result<bool, AppError>;
    /// Idempotent: removing an absent member is a no-op.
    async fn remove_member(&self, project_id: &ObjectId, user_id: &ObjectId) -> Result<(), AppError>;
    async fn update_progress(&self, project_id: &ObjectId, progress: &ProjectProgress) -> Result<(), AppError>;
    async fn delete(&self, id: &ObjectId) -> Result<(), AppError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create(&self, task: &Task) -> Result<Task, AppError>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Task>, AppError>;
    async fn list_by_project(&self, project_id: &ObjectId) -> Result<Vec<Task>, AppError>;
    async fn update(&self, task: &Task) -> Result<Task, AppError>;
    async fn delete(&self, id: &ObjectId) -> Result<(), AppError>;
    async fn count_by_project(&self, project_id: &ObjectId, status: Option<&str>) -> Result<i64, AppError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: &Comment) -> Result<Comment, AppError>;
    async fn list_by_task(&self, task_id: &ObjectId) -> Result<Vec<Comment>, AppError>;
    /// Returns the updated comment, or None if it does not exist.
    async fn update_content(&self, id: &ObjectId, content: &str) -> Result<Option<Comment>, AppError>;
    /// Returns whether a comment was actually deleted.
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: &Notification) -> Result<(), AppError>;
    async fn list_for_recipient(&self, recipient_id: &ObjectId) -> Result<Vec<Notification>, AppError>;
    /// Returns whether a notification belonging to the recipient was marked.
    async fn mark_read(&self, id: &ObjectId, recipient_id: &ObjectId) -> Result<bool, AppError>;
}
