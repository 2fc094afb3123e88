//! Account lifecycle - withdrawal with cascading soft delete

pub mod actions;
pub mod cascade;

pub use actions::withdraw_account;
pub use cascade::{CascadeEdge, SOFT_DELETE_EDGES};
