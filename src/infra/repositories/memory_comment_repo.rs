use crate::domain::{models::comment::Comment, ports::CommentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryCommentRepo {
    comments: RwLock<Vec<Comment>>,
}

impl MemoryCommentRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepo {
    async fn create(&self, comment: &Comment) -> Result<Comment, AppError> {
        let mut comments = self.comments.write().unwrap_or_else(|e| e.into_inner());
        comments.push(comment.clone());
        Ok(comment.clone())
    }

    async fn list_by_task(&self, task_id: &ObjectId) -> Result<Vec<Comment>, AppError> {
        let comments = self.comments.read().unwrap_or_else(|e| e.into_inner());
        let mut hits: Vec<Comment> = comments.iter().filter(|c| &c.task_id == task_id).cloned().collect();
        hits.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(hits)
    }

    async fn update_content(&self, id: &ObjectId, content: &str) -> Result<Option<Comment>, AppError> {
        let mut comments = self.comments.write().unwrap_or_else(|e| e.into_inner());
        let Some(comment) = comments.iter_mut().find(|c| &c.id == id) else {
            return Ok(None);
        };
        comment.content = content.to_string();
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut comments = self.comments.write().unwrap_or_else(|e| e.into_inner());
        let before = comments.len();
        comments.retain(|c| &c.id != id);
        Ok(comments.len() < before)
    }
}
