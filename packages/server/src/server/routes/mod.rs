pub mod accounts;
pub mod applications;
pub mod health;
pub mod notifications;

pub use accounts::withdraw_account;
pub use applications::{
    create_application, get_application, list_my_applications, update_application_status,
    withdraw_application,
};
pub use health::health_handler;
pub use notifications::{list_my_notifications, mark_notification_read};
