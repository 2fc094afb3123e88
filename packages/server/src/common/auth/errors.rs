use thiserror::Error;

/// Authentication failures: the caller could not be resolved to an identity.
///
/// These all surface as 401 responses. Resource-level denials for a resolved
/// identity are a different failure (`Error::Forbidden`), never an AuthError.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication required")]
    MissingCredential,

    #[error("Invalid or expired credential")]
    InvalidCredential,

    #[error("Account has been deleted")]
    AccountDeleted,
}
