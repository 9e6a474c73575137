use crate::domain::{models::task::Task, ports::TaskRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::{Collection, Database};

pub struct MongoTaskRepo {
    tasks: Collection<Task>,
}

impl MongoTaskRepo {
    pub fn new(db: &Database) -> Self {
        Self { tasks: db.collection("tasks") }
    }
}

#[async_trait]
impl TaskRepository for MongoTaskRepo {
    async fn create(&self, task: &Task) -> Result<Task, AppError> {
        self.tasks.insert_one(task).await?;
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Task>, AppError> {
        Ok(self.tasks.find_one(doc! { "_id": *id }).await?)
    }

    async fn list_by_project(&self, project_id: &ObjectId) -> Result<Vec<Task>, AppError> {
        let cursor = self
            .tasks
            .find(doc! { "project_id": *project_id })
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update(&self, task: &Task) -> Result<Task, AppError> {
        self.tasks.replace_one(doc! { "_id": task.id }, task).await?;
        Ok(task.clone())
    }

    async fn delete(&self, id: &ObjectId) -> Result<(), AppError> {
        self.tasks.delete_one(doc! { "_id": *id }).await?;
        Ok(())
    }

    async fn count_by_project(&self, project_id: &ObjectId, status: Option<&str>) -> Result<i64, AppError> {
        let mut filter = doc! { "project_id": *project_id };
        if let Some(status) = status {
            filter.insert("status", status);
        }

        let count = self.tasks.count_documents(filter).await?;
        Ok(count as i64)
    }
}
