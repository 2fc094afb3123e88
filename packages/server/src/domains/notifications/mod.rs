//! Notifications - append-only inbox rows produced by domain events

pub mod data;
pub mod dispatcher;
pub mod models;

pub use data::NotificationData;
pub use models::Notification;
