pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

pub use config::cli::LocalStorage;
pub use config::{AppConfig, CliConfig};
pub use core::catalog::CatalogLoader;
pub use core::matcher::Matcher;
pub use core::pricing::PricingEngine;
pub use utils::error::{PricerError, Result};
pub use web::{create_router, AppState};
