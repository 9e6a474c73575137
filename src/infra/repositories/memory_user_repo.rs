use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::{oid::ObjectId, DateTime};
use std::sync::RwLock;

/// In-memory adapter. Enforces the same uniqueness the MongoDB unique
/// indexes enforce, surfacing the identical conflict message.
#[derive(Default)]
pub struct MemoryUserRepo {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_entry() -> AppError {
    AppError::Conflict("Resource already exists (duplicate entry)".to_string())
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if users.iter().any(|u| u.username == user.username || u.email == user.email) {
            return Err(duplicate_entry());
        }
        users.push(user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_profile(
        &self,
        id: &ObjectId,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());

        if let Some(username) = username {
            if users.iter().any(|u| &u.id != id && u.username == username) {
                return Err(duplicate_entry());
            }
        }
        if let Some(email) = email {
            if users.iter().any(|u| &u.id != id && u.email == email) {
                return Err(duplicate_entry());
            }
        }

        let Some(user) = users.iter_mut().find(|u| &u.id == id) else {
            return Ok(None);
        };
        if let Some(username) = username {
            user.username = username.to_string();
        }
        if let Some(email) = email {
            user.email = email.to_string();
        }
        Ok(Some(user.clone()))
    }

    async fn record_login(&self, id: &ObjectId) -> Result<(), AppError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if let Some(user) = users.iter_mut().find(|u| &u.id == id) {
            user.last_login = Some(DateTime::now());
        }
        Ok(())
    }

    async fn add_organization(&self, user_id: &ObjectId, organization_id: &ObjectId) -> Result<(), AppError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if let Some(user) = users.iter_mut().find(|u| &u.id == user_id) {
            if !user.organizations.contains(organization_id) {
                user.organizations.push(*organization_id);
            }
        }
        Ok(())
    }

    async fn search_by_username(&self, query: &str, limit: i64) -> Result<Vec<User>, AppError> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        let needle = query.to_lowercase();
        Ok(users
            .iter()
            .filter(|u| u.username.to_lowercase().contains(&needle))
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
