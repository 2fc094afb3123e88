pub mod apply;
pub mod queries;
pub mod transition;
pub mod withdraw;

pub use apply::apply;
pub use queries::{get_application, list_my_applications};
pub use transition::transition;
pub use withdraw::withdraw;
