//! Transition action - a hospital moves an application to its next stage
//!
//! The status update and the notification insert share one transaction:
//! when this returns Ok, the notification row is durably committed alongside
//! the new status; on any failure neither is visible.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::auth::Identity;
use crate::domains::applications::events::ApplicationEvent;
use crate::domains::applications::guard;
use crate::domains::applications::machines::{self, Transition};
use crate::domains::applications::models::{Application, ApplicationStatus};
use crate::domains::jobs::models::Job;
use crate::domains::notifications::dispatcher;
use crate::error::{Error, Result};

/// Move an application to `requested`, notifying the veterinarian.
///
/// Order of checks: existence (application, then parent job), ownership
/// (hospital side required - the applicant may read but never write status),
/// the transition table, then parent-job liveness. A terminal self-loop
/// succeeds as a no-op without a write or a notification, even against a
/// soft-deleted job; only a real status write requires a live parent.
pub async fn transition(
    application_id: Uuid,
    requested: ApplicationStatus,
    identity: &Identity,
    pool: &PgPool,
) -> Result<Application> {
    let mut tx = pool.begin().await?;

    // Row lock: concurrent transitions against the same application
    // serialize here, losers observe the winner's committed status.
    let application = Application::lock_by_id(application_id, &mut *tx)
        .await?
        .ok_or(Error::NotFound("application"))?;

    let job = Job::find_by_id(application.job_id, &mut *tx)
        .await?
        .ok_or(Error::NotFound("job"))?;

    guard::require_hospital_owner(identity, &application, &job)?;

    match machines::validate_transition(application.status, requested)? {
        Transition::NoOp => {
            tx.rollback().await?;
            return Ok(application);
        }
        Transition::Apply => {}
    }

    // Only an actual status write requires a live parent job; the idempotent
    // terminal repeat above writes nothing.
    if job.deleted_at.is_some() {
        return Err(Error::JobUnavailable);
    }

    // Optimistic re-check on updated_at; under the row lock a miss means a
    // writer slipped between our read and write, surfaced as a retryable
    // Conflict.
    let updated = Application::update_status(
        application.id,
        requested,
        application.updated_at,
        &mut *tx,
    )
    .await?
    .ok_or(Error::Conflict)?;

    let event = ApplicationEvent::StatusChanged {
        application_id: updated.id,
        veterinarian_id: updated.veterinarian_id,
        job_id: updated.job_id,
        new_status: updated.status,
    };
    dispatcher::dispatch(&event, &mut tx).await?;

    tx.commit().await?;

    info!(
        application_id = %updated.id,
        from = %application.status,
        to = %updated.status,
        "Application status changed"
    );

    Ok(updated)
}
