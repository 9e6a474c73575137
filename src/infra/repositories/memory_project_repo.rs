use crate::domain::{
    models::project::{Member, Project, ProjectProgress},
    ports::ProjectRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use bson::{oid::ObjectId, DateTime};
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryProjectRepo {
    projects: RwLock<Vec<Project>>,
}

impl MemoryProjectRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepo {
    async fn create(&self, project: &Project) -> Result<Project, AppError> {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        projects.push(project.clone());
        Ok(project.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Project>, AppError> {
        let projects = self.projects.read().unwrap_or_else(|e| e.into_inner());
        Ok(projects.iter().find(|p| &p.id == id).cloned())
    }

    async fn list_for_member(&self, user_id: &ObjectId) -> Result<Vec<Project>, AppError> {
        let projects = self.projects.read().unwrap_or_else(|e| e.into_inner());
        let mut hits: Vec<Project> = projects.iter().filter(|p| p.is_member(user_id)).cloned().collect();
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(hits)
    }

    async fn update(&self, project: &Project) -> Result<Project, AppError> {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = projects.iter_mut().find(|p| p.id == project.id) {
            *existing = project.clone();
        }
        Ok(project.clone())
    }

    async fn add_member(&self, project_id: &ObjectId, member: &Member) -> Result<bool, AppError> {
        // The write lock spans check and push, matching the atomicity of the
        // MongoDB conditional update.
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        let Some(project) = projects.iter_mut().find(|p| &p.id == project_id) else {
            return Ok(false);
        };
        if project.is_member(&member.user_id) {
            return Ok(false);
        }
        project.members.push(member.clone());
        project.updated_at = DateTime::now();
        Ok(true)
    }

    async fn remove_member(&self, project_id: &ObjectId, user_id: &ObjectId) -> Result<(), AppError> {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        if let Some(project) = projects.iter_mut().find(|p| &p.id == project_id) {
            if project.is_member(user_id) {
                project.members.retain(|m| &m.user_id != user_id);
                project.updated_at = DateTime::now();
            }
        }
        Ok(())
    }

    async fn update_progress(&self, project_id: &ObjectId, progress: &ProjectProgress) -> Result<(), AppError> {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        if let Some(project) = projects.iter_mut().find(|p| &p.id == project_id) {
            project.progress = progress.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> Result<(), AppError> {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        projects.retain(|p| &p.id != id);
        Ok(())
    }
}
