use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::notifications::models::Notification;

/// Notification API representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationData {
    pub id: String,
    pub notification_type: String,
    pub title: String,
    pub description: String,
    pub related_application_id: Option<String>,
    pub related_status: Option<String>,
    pub url: String,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationData {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            notification_type: notification.notification_type,
            title: notification.title,
            description: notification.description,
            related_application_id: notification
                .related_application_id
                .map(|id| id.to_string()),
            related_status: notification.related_status.map(|s| s.to_string()),
            url: notification.url,
            is_read: notification.is_read,
            read_at: notification.read_at,
            created_at: notification.created_at,
        }
    }
}
