//! Identity and credential primitives shared by every domain.

pub mod errors;
pub mod identity;

pub use errors::AuthError;
pub use identity::{Credential, Identity, Role};
