use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use sqlx::postgres::PgExecutor;
use uuid::Uuid;

use crate::common::auth::Role;
use crate::error::{Error, Result};

/// User model - SQL persistence layer
///
/// Soft-deleted rows are kept for the 90-day recovery window; the restore
/// path (re-registration with the same phone number) is owned by the
/// registration service and keys on `phone_hash`.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deletion_reason: Option<String>,
}

#[derive(sqlx::FromRow, Debug)]
struct UserRow {
    id: Uuid,
    name: String,
    phone_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    deletion_reason: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = Error;

    fn try_from(row: UserRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            name: row.name,
            phone_hash: row.phone_hash,
            role: row
                .role
                .parse()
                .map_err(|_| Error::Validation(format!("unknown stored role: {}", row.role)))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
            deletion_reason: row.deletion_reason,
        })
    }
}

impl User {
    /// Find a user by ID, including soft-deleted rows.
    ///
    /// Callers that must not see deleted accounts (the resolver) check
    /// `deleted_at` themselves; the row has to stay readable for the
    /// recovery window.
    pub async fn find_by_id<'e>(id: Uuid, executor: impl PgExecutor<'e>) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        row.map(Self::try_from).transpose()
    }

    /// Mark a user soft-deleted with a reason.
    ///
    /// Returns the deletion timestamp, or `None` if the row is missing or
    /// already deleted.
    pub async fn mark_deleted<'e>(
        id: Uuid,
        reason: &str,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<DateTime<Utc>>> {
        let deleted_at: Option<DateTime<Utc>> = sqlx::query_scalar(
            "UPDATE users
             SET deleted_at = NOW(), deletion_reason = $2, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING deleted_at",
        )
        .bind(id)
        .bind(reason)
        .fetch_optional(executor)
        .await?;

        Ok(deleted_at)
    }
}

/// Hash a phone number for storage in the users table
pub fn hash_phone_number(phone_number: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(phone_number.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_hash_is_deterministic() {
        let a = hash_phone_number("+821012345678");
        let b = hash_phone_number("+821012345678");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_phone_hash_differs_per_number() {
        assert_ne!(
            hash_phone_number("+821012345678"),
            hash_phone_number("+821087654321")
        );
    }

    #[test]
    fn test_unknown_stored_role_is_rejected() {
        let row = UserRow {
            id: Uuid::new_v4(),
            name: "김수의".to_string(),
            phone_hash: hash_phone_number("+821012345678"),
            role: "admin".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
            deletion_reason: None,
        };
        assert!(User::try_from(row).is_err());
    }
}
