pub mod catalog;
pub mod matcher;
pub mod parser;
pub mod pricing;
pub mod render;

pub use crate::domain::model::{Catalog, CatalogEntry, LineResult, RequestResult, ShoppingList};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
