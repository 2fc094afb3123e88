use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgExecutor;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Publication state of a job posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Draft,
    Open,
    Closed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Draft => write!(f, "draft"),
            JobStatus::Open => write!(f, "open"),
            JobStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "draft" => Ok(JobStatus::Draft),
            "open" => Ok(JobStatus::Open),
            "closed" => Ok(JobStatus::Closed),
            _ => Err(Error::Validation(format!("unknown job status: {}", s))),
        }
    }
}

/// Job model - SQL persistence layer
///
/// Owned by exactly one hospital user. Reads do not filter soft-deleted rows:
/// historical applications stay readable against deleted jobs, and the
/// ownership chain still needs the hospital_id. Mutation paths check
/// `deleted_at` explicitly.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: Uuid,
    pub hospital_id: Uuid,
    pub title: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(sqlx::FromRow, Debug)]
struct JobRow {
    id: Uuid,
    hospital_id: Uuid,
    title: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<JobRow> for Job {
    type Error = Error;

    fn try_from(row: JobRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            hospital_id: row.hospital_id,
            title: row.title,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

impl Job {
    /// Whether the job currently accepts new applications.
    pub fn accepts_applications(&self) -> bool {
        self.deleted_at.is_none() && self.status == JobStatus::Open
    }

    /// Find a job by ID, including soft-deleted rows
    pub async fn find_by_id<'e>(id: Uuid, executor: impl PgExecutor<'e>) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        row.map(Self::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with(status: JobStatus, deleted_at: Option<DateTime<Utc>>) -> Job {
        Job {
            id: Uuid::new_v4(),
            hospital_id: Uuid::new_v4(),
            title: "야간 응급 수의사".to_string(),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at,
        }
    }

    #[test]
    fn test_only_open_non_deleted_jobs_accept_applications() {
        assert!(job_with(JobStatus::Open, None).accepts_applications());
        assert!(!job_with(JobStatus::Draft, None).accepts_applications());
        assert!(!job_with(JobStatus::Closed, None).accepts_applications());
        assert!(!job_with(JobStatus::Open, Some(Utc::now())).accepts_applications());
    }

    #[test]
    fn test_job_status_round_trip() {
        for status in [JobStatus::Draft, JobStatus::Open, JobStatus::Closed] {
            assert_eq!(status.to_string().parse::<JobStatus>().unwrap(), status);
        }
        assert!("archived".parse::<JobStatus>().is_err());
    }
}
