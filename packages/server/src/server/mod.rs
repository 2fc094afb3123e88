// HTTP server setup (Axum)
pub mod app;
pub mod error;
pub mod extract;
pub mod routes;

pub use app::*;
