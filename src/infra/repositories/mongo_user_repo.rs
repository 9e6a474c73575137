use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures::stream::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

pub struct MongoUserRepo {
    users: Collection<User>,
}

impl MongoUserRepo {
    pub fn new(db: &Database) -> Self {
        Self { users: db.collection("users") }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        self.users.insert_one(user).await?;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "username": username }).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "email": email }).await?)
    }

    async fn update_profile(
        &self,
        id: &ObjectId,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let mut set = Document::new();
        if let Some(username) = username {
            set.insert("username", username);
        }
        if let Some(email) = email {
            set.insert("email", email);
        }

        let updated = self
            .users
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn record_login(&self, id: &ObjectId) -> Result<(), AppError> {
        self.users
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "last_login": DateTime::now() } },
            )
            .await?;
        Ok(())
    }

    async fn add_organization(&self, user_id: &ObjectId, organization_id: &ObjectId) -> Result<(), AppError> {
        self.users
            .update_one(
                doc! { "_id": *user_id },
                doc! { "$addToSet": { "organizations": *organization_id } },
            )
            .await?;
        Ok(())
    }

    async fn search_by_username(&self, query: &str, limit: i64) -> Result<Vec<User>, AppError> {
        let cursor = self
            .users
            .find(doc! { "username": { "$regex": query, "$options": "i" } })
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
