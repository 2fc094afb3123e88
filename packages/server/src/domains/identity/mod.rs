//! Identity - credential verification and resolution
//!
//! The only component permitted to trust role claims embedded in a
//! credential; everything downstream re-verifies ownership against the store.

pub mod jwt;
pub mod models;
pub mod resolver;

pub use jwt::{Claims, JwtService};
pub use models::User;
pub use resolver::resolve;
