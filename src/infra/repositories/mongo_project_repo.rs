use crate::domain::{
    models::project::{Member, Project, ProjectProgress},
    ports::ProjectRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, DateTime};
use futures::stream::TryStreamExt;
use mongodb::{Collection, Database};

pub struct MongoProjectRepo {
    projects: Collection<Project>,
}

impl MongoProjectRepo {
    pub fn new(db: &Database) -> Self {
        Self { projects: db.collection("projects") }
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepo {
    async fn create(&self, project: &Project) -> Result<Project, AppError> {
        self.projects.insert_one(project).await?;
        Ok(project.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Project>, AppError> {
        Ok(self.projects.find_one(doc! { "_id": *id }).await?)
    }

    async fn list_for_member(&self, user_id: &ObjectId) -> Result<Vec<Project>, AppError> {
        let cursor = self
            .projects
            .find(doc! { "members.user_id": *user_id })
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update(&self, project: &Project) -> Result<Project, AppError> {
        self.projects
            .replace_one(doc! { "_id": project.id }, project)
            .await?;
        Ok(project.clone())
    }

    async fn add_member(&self, project_id: &ObjectId, member: &Member) -> Result<bool, AppError> {
        let member_doc = bson::to_bson(member)
            .map_err(|e| AppError::InternalWithMsg(format!("Failed to encode member: {e}")))?;

        // The filter excludes documents already holding the user id, so the
        // push and the uniqueness check are a single atomic operation.
        let result = self
            .projects
            .update_one(
                doc! { "_id": *project_id, "members.user_id": { "$ne": member.user_id } },
                doc! { "$push": { "members": member_doc }, "$set": { "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(result.modified_count > 0)
    }

    async fn remove_member(&self, project_id: &ObjectId, user_id: &ObjectId) -> Result<(), AppError> {
        self.projects
            .update_one(
                doc! { "_id": *project_id, "members.user_id": *user_id },
                doc! { "$pull": { "members": { "user_id": *user_id } }, "$set": { "updated_at": DateTime::now() } },
            )
            .await?;
        Ok(())
    }

    async fn update_progress(&self, project_id: &ObjectId, progress: &ProjectProgress) -> Result<(), AppError> {
        let progress_doc = bson::to_bson(progress)
            .map_err(|e| AppError::InternalWithMsg(format!("Failed to encode progress: {e}")))?;

        self.projects
            .update_one(doc! { "_id": *project_id }, doc! { "$set": { "progress": progress_doc } })
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> Result<(), AppError> {
        self.projects.delete_one(doc! { "_id": *id }).await?;
        Ok(())
    }
}
