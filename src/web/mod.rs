// Web layer: axum router, form handlers and server-rendered pages.

pub mod pages;
pub mod routes;

pub use routes::{create_router, AppState};
