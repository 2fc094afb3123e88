//! Account withdrawal - soft-delete a user and everything they own
//!
//! One transaction marks the user row and every cascade edge, or nothing.
//! After commit the account is invisible to authentication while the rows
//! stay restorable for the recovery window.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::auth::Identity;
use crate::domains::accounts::cascade::SOFT_DELETE_EDGES;
use crate::domains::identity::models::User;
use crate::error::{Error, Result};

pub async fn withdraw_account(
    user_id: Uuid,
    reason: &str,
    identity: &Identity,
    pool: &PgPool,
) -> Result<DateTime<Utc>> {
    // Self-service only; there is no admin override on this path.
    if identity.user_id != user_id {
        return Err(Error::Forbidden);
    }

    let mut tx = pool.begin().await?;

    let deleted_at = User::mark_deleted(user_id, reason, &mut *tx)
        .await?
        .ok_or(Error::NotFound("user"))?;

    for edge in SOFT_DELETE_EDGES {
        sqlx::query(&edge.soft_delete_sql())
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(user_id = %user_id, reason = %reason, "Account withdrawn");

    Ok(deleted_at)
}
