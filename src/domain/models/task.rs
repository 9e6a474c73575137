use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

pub const TASK_STATUSES: [&str; 3] = ["pending", "in_progress", "completed"];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub project_id: ObjectId,
    pub creator_id: ObjectId,
    pub assignee_id: Option<ObjectId>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Task {
    pub fn new(
        title: String,
        description: Option<String>,
        status: String,
        project_id: ObjectId,
        creator_id: ObjectId,
        assignee_id: Option<ObjectId>,
    ) -> Self {
        let now = DateTime::now();
        Self {
            id: ObjectId::new(),
            title,
            description,
            status,
            project_id,
            creator_id,
            assignee_id,
            created_at: now,
            updated_at: now,
        }
    }
}
