//! Application lifecycle - the review-stage state machine and its guards
//!
//! A status write flows: resolve identity -> lock the row -> ownership guard
//! -> transition table -> persist + dispatch notification in one transaction.

pub mod actions;
pub mod data;
pub mod events;
pub mod guard;
pub mod machines;
pub mod models;

pub use data::ApplicationData;
pub use models::{Application, ApplicationStatus};
