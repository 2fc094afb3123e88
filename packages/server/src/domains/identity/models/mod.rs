pub mod user;

pub use user::{hash_phone_number, User};
