use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgExecutor;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Review stage of an application.
///
/// The allowed moves between stages live in `machines`; this type only knows
/// how each stage is spelled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    DocumentPass,
    InterviewPass,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// The token written to storage. Always the current spelling, never a
    /// legacy alias.
    pub fn as_db_value(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::DocumentPass => "document_pass",
            ApplicationStatus::InterviewPass => "interview_pass",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Storage-boundary adapter: maps stored tokens onto the enum, including
    /// the legacy aliases still present in rows written by the old system.
    /// This is the only place legacy spellings are known; the state machine
    /// and everything above the model layer only sees the enum.
    pub fn from_db_value(s: &str) -> Result<Self> {
        match s {
            "pending" | "applied" => Ok(ApplicationStatus::Pending),
            "reviewing" | "in_review" => Ok(ApplicationStatus::Reviewing),
            "document_pass" | "document_passed" => Ok(ApplicationStatus::DocumentPass),
            "interview_pass" | "interview_passed" => Ok(ApplicationStatus::InterviewPass),
            "accepted" | "final_pass" => Ok(ApplicationStatus::Accepted),
            "rejected" | "failed" => Ok(ApplicationStatus::Rejected),
            _ => Err(Error::Validation(format!(
                "unknown stored application status: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_db_value())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = Error;

    /// Strict parse for API input: current tokens only, no legacy aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "reviewing" => Ok(ApplicationStatus::Reviewing),
            "document_pass" => Ok(ApplicationStatus::DocumentPass),
            "interview_pass" => Ok(ApplicationStatus::InterviewPass),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(Error::Validation(format!(
                "unknown application status: {}",
                s
            ))),
        }
    }
}

/// Application model - SQL persistence layer
///
/// One row per (job, veterinarian) pair among non-deleted rows, enforced by
/// a partial unique index. Status mutations go through `actions::transition`,
/// which serializes writers with a row lock.
#[derive(Debug, Clone)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub veterinarian_id: Uuid,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Raw row as stored; status is decoded through the legacy adapter.
#[derive(sqlx::FromRow, Debug)]
struct ApplicationRow {
    id: Uuid,
    job_id: Uuid,
    veterinarian_id: Uuid,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = Error;

    fn try_from(row: ApplicationRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            job_id: row.job_id,
            veterinarian_id: row.veterinarian_id,
            status: ApplicationStatus::from_db_value(&row.status)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

impl Application {
    /// Find a non-deleted application by ID (no lock)
    pub async fn find_by_id<'e>(
        id: Uuid,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(Self::try_from).transpose()
    }

    /// Find a non-deleted application by ID and take the row lock.
    ///
    /// Concurrent writers against the same application serialize here.
    pub async fn lock_by_id<'e>(
        id: Uuid,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications WHERE id = $1 AND deleted_at IS NULL FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(Self::try_from).transpose()
    }

    /// Find the non-deleted application for a (job, veterinarian) pair
    pub async fn find_active_by_pair<'e>(
        job_id: Uuid,
        veterinarian_id: Uuid,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications
             WHERE job_id = $1 AND veterinarian_id = $2 AND deleted_at IS NULL",
        )
        .bind(job_id)
        .bind(veterinarian_id)
        .fetch_optional(executor)
        .await?;

        row.map(Self::try_from).transpose()
    }

    /// All non-deleted applications of a veterinarian, newest first
    pub async fn find_by_veterinarian<'e>(
        veterinarian_id: Uuid,
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications
             WHERE veterinarian_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC",
        )
        .bind(veterinarian_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Self::try_from).collect()
    }

    /// Insert a new application with initial status `pending`
    pub async fn insert<'e>(
        job_id: Uuid,
        veterinarian_id: Uuid,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            "INSERT INTO applications (id, job_id, veterinarian_id, status)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(job_id)
        .bind(veterinarian_id)
        .bind(ApplicationStatus::Pending.as_db_value())
        .fetch_one(executor)
        .await?;

        Self::try_from(row)
    }

    /// Persist a status change with an optimistic re-check on `updated_at`.
    ///
    /// Returns `None` when the row moved under us; the caller surfaces that
    /// as a retryable `Conflict`.
    pub async fn update_status<'e>(
        id: Uuid,
        status: ApplicationStatus,
        expected_updated_at: DateTime<Utc>,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            "UPDATE applications
             SET status = $2, updated_at = NOW()
             WHERE id = $1 AND updated_at = $3 AND deleted_at IS NULL
             RETURNING *",
        )
        .bind(id)
        .bind(status.as_db_value())
        .bind(expected_updated_at)
        .fetch_optional(executor)
        .await?;

        row.map(Self::try_from).transpose()
    }

    /// Hard-delete an application (withdrawal before a decision was reached;
    /// no notification history references it yet)
    pub async fn delete<'e>(id: Uuid, executor: impl PgExecutor<'e>) -> Result<()> {
        sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
