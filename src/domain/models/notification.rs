use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub recipient_id: ObjectId,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime,
}

impl Notification {
    pub fn new(recipient_id: ObjectId, kind: String, title: String, message: String) -> Self {
        Self {
            id: ObjectId::new(),
            recipient_id,
            kind,
            title,
            message,
            is_read: false,
            created_at: DateTime::now(),
        }
    }
}
