use bson::oid::ObjectId;
use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime,
    pub last_login: Option<DateTime>,
    /// Organizations the user belongs to. Set semantics: an id appears at most once.
    #[serde(default)]
    pub organizations: Vec<ObjectId>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: ObjectId::new(),
            username,
            email,
            password_hash,
            is_active: true,
            created_at: DateTime::now(),
            last_login: None,
            organizations: Vec::new(),
        }
    }
}
