use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::auth::Identity;
use crate::domains::applications::models::ApplicationStatus;
use crate::error::{Error, Result};

/// Notification record - append-only inbox entry for one recipient
///
/// Rows are created exclusively by the dispatcher as a side effect of a
/// domain event, never from a client request. The only mutable field is the
/// read marker, and only the recipient may set it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub notification_type: String,
    pub title: String,
    pub description: String,
    pub related_application_id: Option<Uuid>,
    pub related_status: Option<ApplicationStatus>,
    pub url: String,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow, Debug)]
struct NotificationRow {
    id: Uuid,
    recipient_id: Uuid,
    notification_type: String,
    title: String,
    description: String,
    related_application_id: Option<Uuid>,
    related_status: Option<String>,
    url: String,
    is_read: bool,
    read_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<NotificationRow> for Notification {
    type Error = Error;

    fn try_from(row: NotificationRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            recipient_id: row.recipient_id,
            notification_type: row.notification_type,
            title: row.title,
            description: row.description,
            related_application_id: row.related_application_id,
            related_status: row
                .related_status
                .as_deref()
                .map(ApplicationStatus::from_db_value)
                .transpose()?,
            url: row.url,
            is_read: row.is_read,
            read_at: row.read_at,
            created_at: row.created_at,
        })
    }
}

/// Fields of a notification about to be inserted.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub recipient_id: Uuid,
    pub notification_type: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub related_application_id: Option<Uuid>,
    pub related_status: Option<ApplicationStatus>,
    pub url: &'static str,
}

impl Notification {
    /// Append a notification row. Takes an executor so the dispatcher can
    /// run inside the caller's transaction.
    pub async fn insert<'e>(
        new: NewNotification,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self> {
        let row = sqlx::query_as::<_, NotificationRow>(
            "INSERT INTO notifications (
                id,
                recipient_id,
                notification_type,
                title,
                description,
                related_application_id,
                related_status,
                url
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(new.recipient_id)
        .bind(new.notification_type)
        .bind(new.title)
        .bind(new.description)
        .bind(new.related_application_id)
        .bind(new.related_status.map(|s| s.as_db_value()))
        .bind(new.url)
        .fetch_one(executor)
        .await?;

        Self::try_from(row)
    }

    /// All notifications addressed to a recipient, newest first
    pub async fn find_by_recipient(recipient_id: Uuid, pool: &PgPool) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            "SELECT * FROM notifications WHERE recipient_id = $1 ORDER BY created_at DESC",
        )
        .bind(recipient_id)
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(Self::try_from).collect()
    }

    /// Total notifications addressed to a recipient
    pub async fn count_for_recipient(recipient_id: Uuid, pool: &PgPool) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE recipient_id = $1")
                .bind(recipient_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Mark a notification read. Recipient-only; repeat calls keep the
    /// original read_at.
    pub async fn mark_read(id: Uuid, identity: &Identity, pool: &PgPool) -> Result<Self> {
        let row = sqlx::query_as::<_, NotificationRow>(
            "SELECT * FROM notifications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(Error::NotFound("notification"))?;

        if row.recipient_id != identity.user_id {
            return Err(Error::Forbidden);
        }

        let updated = sqlx::query_as::<_, NotificationRow>(
            "UPDATE notifications
             SET is_read = TRUE, read_at = COALESCE(read_at, NOW())
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Self::try_from(updated)
    }
}
