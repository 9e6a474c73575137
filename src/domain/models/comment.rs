use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub task_id: ObjectId,
    pub author_id: ObjectId,
    pub content: String,
    pub created_at: DateTime,
}

impl Comment {
    pub fn new(task_id: ObjectId, author_id: ObjectId, content: String) -> Self {
        Self {
            id: ObjectId::new(),
            task_id,
            author_id,
            content,
            created_at: DateTime::now(),
        }
    }
}
