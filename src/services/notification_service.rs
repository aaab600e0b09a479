//! Notification delivery.
//!
//! The default notifier does not reach any external channel: it logs each
//! message and keeps it in an in-memory outbox.

use crate::domain::UserId;
use crate::error::VolunteerResult;
use crate::models::Notification;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Sends messages to users.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Deliver `message` to `user_id`.
    async fn send_notification(&self, user_id: UserId, message: &str)
        -> VolunteerResult<Notification>;

    /// Copy of every notification delivered so far, oldest first.
    async fn sent_notifications(&self) -> Vec<Notification>;
}

/// Notifier that records messages in memory and logs them.
#[derive(Default)]
pub struct OutboxNotificationService {
    outbox: RwLock<Vec<Notification>>,
}

impl OutboxNotificationService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationService for OutboxNotificationService {
    async fn send_notification(
        &self,
        user_id: UserId,
        message: &str,
    ) -> VolunteerResult<Notification> {
        let notification = Notification::new(user_id, message);
        tracing::info!(user_id = %user_id, text = message, "Notification sent");
        self.outbox.write().await.push(notification.clone());
        Ok(notification)
    }

    async fn sent_notifications(&self) -> Vec<Notification> {
        self.outbox.read().await.clone()
    }
}
