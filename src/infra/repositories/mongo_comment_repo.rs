use crate::domain::{models::comment::Comment, ports::CommentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

pub struct MongoCommentRepo {
    comments: Collection<Comment>,
}

impl MongoCommentRepo {
    pub fn new(db: &Database) -> Self {
        Self { comments: db.collection("comments") }
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepo {
    async fn create(&self, comment: &Comment) -> Result<Comment, AppError> {
        self.comments.insert_one(comment).await?;
        Ok(comment.clone())
    }

    async fn list_by_task(&self, task_id: &ObjectId) -> Result<Vec<Comment>, AppError> {
        let cursor = self
            .comments
            .find(doc! { "task_id": *task_id })
            .sort(doc! { "created_at": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_content(&self, id: &ObjectId, content: &str) -> Result<Option<Comment>, AppError> {
        let updated = self
            .comments
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": { "content": content } })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.comments.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }
}
