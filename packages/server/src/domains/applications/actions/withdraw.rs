//! Withdraw action - a veterinarian retracts an application
//!
//! Allowed only while the hospital has not advanced past initial screening
//! (`pending` or `reviewing`). Withdrawal hard-deletes the row: no decision
//! notification references it yet, unlike account deletion which soft-deletes
//! to keep history.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::auth::Identity;
use crate::domains::applications::guard;
use crate::domains::applications::models::{Application, ApplicationStatus};
use crate::domains::jobs::models::Job;
use crate::error::{Error, Result};

pub async fn withdraw(application_id: Uuid, identity: &Identity, pool: &PgPool) -> Result<()> {
    let mut tx = pool.begin().await?;

    let application = Application::lock_by_id(application_id, &mut *tx)
        .await?
        .ok_or(Error::NotFound("application"))?;

    let job = Job::find_by_id(application.job_id, &mut *tx)
        .await?
        .ok_or(Error::NotFound("job"))?;

    guard::require_applicant(identity, &application, &job)?;

    match application.status {
        ApplicationStatus::Pending | ApplicationStatus::Reviewing => {}
        status => return Err(Error::WithdrawalClosed { status }),
    }

    Application::delete(application.id, &mut *tx).await?;
    tx.commit().await?;

    info!(
        application_id = %application_id,
        veterinarian_id = %identity.user_id,
        "Application withdrawn"
    );

    Ok(())
}
