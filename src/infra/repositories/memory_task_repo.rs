use crate::domain::{models::task::Task, ports::TaskRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryTaskRepo {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryTaskRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskRepo {
    async fn create(&self, task: &Task) -> Result<Task, AppError> {
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        tasks.push(task.clone());
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Task>, AppError> {
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        Ok(tasks.iter().find(|t| &t.id == id).cloned())
    }

    async fn list_by_project(&self, project_id: &ObjectId) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        let mut hits: Vec<Task> = tasks.iter().filter(|t| &t.project_id == project_id).cloned().collect();
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(hits)
    }

    async fn update(&self, task: &Task) -> Result<Task, AppError> {
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task.clone();
        }
        Ok(task.clone())
    }

    async fn delete(&self, id: &ObjectId) -> Result<(), AppError> {
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        tasks.retain(|t| &t.id != id);
        Ok(())
    }

    async fn count_by_project(&self, project_id: &ObjectId, status: Option<&str>) -> Result<i64, AppError> {
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        let count = tasks
            .iter()
            .filter(|t| &t.project_id == project_id)
            .filter(|t| status.map_or(true, |s| t.status == s))
            .count();
        Ok(count as i64)
    }
}
