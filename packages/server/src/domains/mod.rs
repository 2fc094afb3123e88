// Business domains
pub mod accounts;
pub mod applications;
pub mod identity;
pub mod jobs;
pub mod notifications;
