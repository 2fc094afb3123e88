//! Typed error taxonomy for the lifecycle core.
//!
//! Every business-rule violation is an expected, typed failure with a stable
//! machine-readable kind. Only infrastructure failures (`Database`) are
//! treated as fatal; nothing in this crate panics on a business rule.

use thiserror::Error;

use crate::common::auth::AuthError;
use crate::domains::applications::models::ApplicationStatus;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Authenticated but not a party to the resource. Distinct from
    /// `NotFound` end to end: existence is always checked first, so an
    /// authenticated non-owner learns that the resource exists but nothing
    /// else.
    #[error("Access denied")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Illegal status transition from {from} to {to}")]
    IllegalTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error("An application for this job already exists")]
    DuplicateApplication,

    #[error("Job is not open for applications")]
    JobUnavailable,

    #[error("Application can no longer be withdrawn (status: {status})")]
    WithdrawalClosed { status: ApplicationStatus },

    /// Lost a concurrent-write race; the caller should retry.
    #[error("Concurrent update conflict, please retry")]
    Conflict,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// Stable machine-readable kind, carried on every API error body.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Auth(_) => "unauthenticated",
            Error::Forbidden => "forbidden",
            Error::NotFound(_) => "not_found",
            Error::IllegalTransition { .. } => "illegal_transition",
            Error::DuplicateApplication => "duplicate_application",
            Error::JobUnavailable => "job_unavailable",
            Error::WithdrawalClosed { .. } => "withdrawal_closed",
            Error::Conflict => "conflict",
            Error::Validation(_) => "validation",
            Error::Database(_) => "internal",
        }
    }

    /// Whether the underlying database error is a unique-constraint violation.
    ///
    /// Used as the backstop for the (job_id, veterinarian_id) partial unique
    /// index when two apply calls race past the duplicate pre-check.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Error::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().as_deref() == Some("23505")
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_stable_per_variant() {
        assert_eq!(Error::Forbidden.kind(), "forbidden");
        assert_eq!(Error::NotFound("application").kind(), "not_found");
        assert_eq!(Error::Auth(AuthError::MissingCredential).kind(), "unauthenticated");
        assert_eq!(Error::Auth(AuthError::AccountDeleted).kind(), "unauthenticated");
        assert_eq!(Error::DuplicateApplication.kind(), "duplicate_application");
        assert_eq!(Error::JobUnavailable.kind(), "job_unavailable");
        assert_eq!(Error::Conflict.kind(), "conflict");
        assert_eq!(Error::Validation("bad".to_string()).kind(), "validation");
        assert_eq!(
            Error::IllegalTransition {
                from: ApplicationStatus::Reviewing,
                to: ApplicationStatus::Accepted,
            }
            .kind(),
            "illegal_transition"
        );
        assert_eq!(
            Error::WithdrawalClosed {
                status: ApplicationStatus::DocumentPass
            }
            .kind(),
            "withdrawal_closed"
        );
    }

    #[test]
    fn test_illegal_transition_message_names_both_states() {
        let err = Error::IllegalTransition {
            from: ApplicationStatus::Reviewing,
            to: ApplicationStatus::Accepted,
        };
        let msg = err.to_string();
        assert!(msg.contains("reviewing"));
        assert!(msg.contains("accepted"));
    }

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!Error::DuplicateApplication.is_unique_violation());
        assert!(!Error::Database(sqlx::Error::RowNotFound).is_unique_violation());
    }
}
