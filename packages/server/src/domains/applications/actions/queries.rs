//! Read side of the application lifecycle

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::auth::{Identity, Role};
use crate::domains::applications::guard;
use crate::domains::applications::models::Application;
use crate::domains::jobs::models::Job;
use crate::error::{Error, Result};

/// Authorized read of a single application.
///
/// Either party may read, including against a soft-deleted job (historical
/// applications stay visible to both sides). Existence is checked before
/// ownership, so a missing application is `NotFound` for everyone.
pub async fn get_application(
    application_id: Uuid,
    identity: &Identity,
    pool: &PgPool,
) -> Result<Application> {
    let application = Application::find_by_id(application_id, pool)
        .await?
        .ok_or(Error::NotFound("application"))?;

    let job = Job::find_by_id(application.job_id, pool)
        .await?
        .ok_or(Error::NotFound("job"))?;

    guard::application_access(identity, &application, &job)?;

    Ok(application)
}

/// The veterinarian's own applications, newest first.
pub async fn list_my_applications(identity: &Identity, pool: &PgPool) -> Result<Vec<Application>> {
    if identity.role != Role::Veterinarian {
        return Err(Error::Forbidden);
    }
    Application::find_by_veterinarian(identity.user_id, pool).await
}
