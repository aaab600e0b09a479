use async_trait::async_trait;
use savepaws_volunteer::error::{VolunteerError, VolunteerResult};
use savepaws_volunteer::models::Notification;
use savepaws_volunteer::services::NotificationService;
use savepaws_volunteer::UserId;
use std::sync::{Arc, Mutex};

/// Mock notifier for testing.
///
/// Records every attempted delivery; when `fail_deliveries` is set, each
/// attempt is recorded and then reported as failed.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNotificationService {
    attempts: Arc<Mutex<Vec<(UserId, String)>>>,
    delivered: Arc<Mutex<Vec<Notification>>>,
    fail: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockNotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_deliveries(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Every (user, message) pair a delivery was attempted for.
    pub fn attempts(&self) -> Vec<(UserId, String)> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationService for MockNotificationService {
    async fn send_notification(
        &self,
        user_id: UserId,
        message: &str,
    ) -> VolunteerResult<Notification> {
        self.attempts
            .lock()
            .unwrap()
            .push((user_id, message.to_string()));

        if *self.fail.lock().unwrap() {
            return Err(VolunteerError::Notification(
                "delivery channel unavailable".to_string(),
            ));
        }

        let notification = Notification::new(user_id, message);
        self.delivered.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    async fn sent_notifications(&self) -> Vec<Notification> {
        self.delivered.lock().unwrap().clone()
    }
}
