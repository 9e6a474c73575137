use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Organization {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub owner_id: ObjectId,
    pub created_at: DateTime,
}

impl Organization {
    pub fn new(name: String, owner_id: ObjectId) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            owner_id,
            created_at: DateTime::now(),
        }
    }
}
