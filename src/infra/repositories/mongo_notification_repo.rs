use crate::domain::{models::notification::Notification, ports::NotificationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::{Collection, Database};

pub struct MongoNotificationRepo {
    notifications: Collection<Notification>,
}

impl MongoNotificationRepo {
    pub fn new(db: &Database) -> Self {
        Self { notifications: db.collection("notifications") }
    }
}

#[async_trait]
impl NotificationRepository for MongoNotificationRepo {
    async fn create(&self, notification: &Notification) -> Result<(), AppError> {
        self.notifications.insert_one(notification).await?;
        Ok(())
    }

    async fn list_for_recipient(&self, recipient_id: &ObjectId) -> Result<Vec<Notification>, AppError> {
        let cursor = self
            .notifications
            .find(doc! { "recipient_id": *recipient_id })
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn mark_read(&self, id: &ObjectId, recipient_id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .notifications
            .update_one(
                doc! { "_id": *id, "recipient_id": *recipient_id },
                doc! { "$set": { "is_read": true } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }
}
