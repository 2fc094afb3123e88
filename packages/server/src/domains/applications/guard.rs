//! Ownership guard - pure decision logic over already-fetched rows
//!
//! Exactly two identities may act on an application: the hospital that owns
//! the parent job, and the veterinarian that filed the application. Callers
//! check existence first and pass the rows in, so `NotFound` always takes
//! precedence over `Forbidden`.

use crate::common::auth::{Identity, Role};
use crate::domains::applications::models::Application;
use crate::domains::jobs::models::Job;
use crate::error::{Error, Result};

/// Which side of an application the caller is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationParty {
    /// The hospital owning the parent job.
    HospitalOwner,
    /// The veterinarian who filed the application.
    Applicant,
}

/// Resolve the caller's side of an application, or deny access.
///
/// Role claims alone are never enough: ownership is compared against the
/// stored rows on every call.
pub fn application_access(
    identity: &Identity,
    application: &Application,
    job: &Job,
) -> Result<ApplicationParty> {
    match identity.role {
        Role::Hospital if job.hospital_id == identity.user_id => {
            Ok(ApplicationParty::HospitalOwner)
        }
        Role::Veterinarian if application.veterinarian_id == identity.user_id => {
            Ok(ApplicationParty::Applicant)
        }
        _ => Err(Error::Forbidden),
    }
}

/// Status writes are hospital-side only; the applicant may read, never write.
pub fn require_hospital_owner(
    identity: &Identity,
    application: &Application,
    job: &Job,
) -> Result<()> {
    match application_access(identity, application, job)? {
        ApplicationParty::HospitalOwner => Ok(()),
        ApplicationParty::Applicant => Err(Error::Forbidden),
    }
}

/// Withdrawal is applicant-side only.
pub fn require_applicant(
    identity: &Identity,
    application: &Application,
    job: &Job,
) -> Result<()> {
    match application_access(identity, application, job)? {
        ApplicationParty::Applicant => Ok(()),
        ApplicationParty::HospitalOwner => Err(Error::Forbidden),
    }
}
