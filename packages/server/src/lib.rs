// Onvet - veterinary hiring platform API core
//
// This crate implements the job-application lifecycle engine: the status
// state machine, the dual-sided ownership checks gating every read and
// mutation, notification fan-out on status changes, and account withdrawal
// with cascading soft deletes.
//
// Layout follows domain-driven design: models own all SQL, actions hold the
// business flows, machines hold pure decision logic, events are fact records.

pub mod common;
pub mod config;
pub mod domains;
pub mod error;
pub mod server;

pub use config::Config;
