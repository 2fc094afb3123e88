pub mod withdraw_account;

pub use withdraw_account::withdraw_account;
