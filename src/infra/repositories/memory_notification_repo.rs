use crate::domain::{models::notification::Notification, ports::NotificationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryNotificationRepo {
    notifications: RwLock<Vec<Notification>>,
}

impl MemoryNotificationRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for MemoryNotificationRepo {
    async fn create(&self, notification: &Notification) -> Result<(), AppError> {
        let mut notifications = self.notifications.write().unwrap_or_else(|e| e.into_inner());
        notifications.push(notification.clone());
        Ok(())
    }

    async fn list_for_recipient(&self, recipient_id: &ObjectId) -> Result<Vec<Notification>, AppError> {
        let notifications = self.notifications.read().unwrap_or_else(|e| e.into_inner());
        let mut hits: Vec<Notification> = notifications
            .iter()
            .filter(|n| &n.recipient_id == recipient_id)
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(hits)
    }

    async fn mark_read(&self, id: &ObjectId, recipient_id: &ObjectId) -> Result<bool, AppError> {
        let mut notifications = self.notifications.write().unwrap_or_else(|e| e.into_inner());
        let Some(notification) = notifications
            .iter_mut()
            .find(|n| &n.id == id && &n.recipient_id == recipient_id)
        else {
            return Ok(false);
        };
        notification.is_read = true;
        Ok(true)
    }
}
