//! Job postings - the parent resource of every application

pub mod models;

pub use models::{Job, JobStatus};
