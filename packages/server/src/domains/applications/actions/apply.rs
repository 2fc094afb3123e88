//! Apply action - a veterinarian files an application against an open job

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::auth::{Identity, Role};
use crate::domains::applications::models::Application;
use crate::domains::jobs::models::Job;
use crate::error::{Error, Result};

/// Create an application with initial status `pending`.
///
/// Fails with:
/// - `Forbidden` when the caller is not a veterinarian
/// - `NotFound` when the job does not exist
/// - `JobUnavailable` when the job is deleted, a draft, or closed
/// - `DuplicateApplication` when a non-deleted application for the
///   (job, veterinarian) pair already exists
pub async fn apply(job_id: Uuid, identity: &Identity, pool: &PgPool) -> Result<Application> {
    if identity.role != Role::Veterinarian {
        return Err(Error::Forbidden);
    }

    let mut tx = pool.begin().await?;

    let job = Job::find_by_id(job_id, &mut *tx)
        .await?
        .ok_or(Error::NotFound("job"))?;
    if !job.accepts_applications() {
        return Err(Error::JobUnavailable);
    }

    // Pre-check for the common case; the partial unique index is the
    // backstop when two apply calls race.
    if Application::find_active_by_pair(job_id, identity.user_id, &mut *tx)
        .await?
        .is_some()
    {
        return Err(Error::DuplicateApplication);
    }

    let application = Application::insert(job_id, identity.user_id, &mut *tx)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                Error::DuplicateApplication
            } else {
                e
            }
        })?;

    tx.commit().await?;

    info!(
        application_id = %application.id,
        job_id = %job_id,
        veterinarian_id = %identity.user_id,
        "Application created"
    );

    Ok(application)
}
