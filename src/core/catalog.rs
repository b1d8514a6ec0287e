use crate::core::{Catalog, CatalogEntry, Storage};
use crate::utils::error::{PricerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One raw CSV row. Extra columns in the file are ignored; a missing column
/// fails the whole load.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    store: String,
    item: String,
    price_per_unit: String,
    unit: String,
}

pub struct CatalogLoader<S: Storage> {
    storage: S,
}

impl<S: Storage> CatalogLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn load(&self, path: &str) -> Result<Catalog> {
        tracing::debug!("Reading catalog file: {}", path);
        let data = self.storage.read_file(path).await?;
        parse_catalog(&data)
    }
}

/// Parse catalog CSV bytes into the price table.
///
/// Store and item are trimmed and lowercased before keying; the unit label is
/// trimmed only. A non-numeric price fails the load with the offending row
/// number (header counts as row 1).
pub fn parse_catalog(data: &[u8]) -> Result<Catalog> {
    let mut reader = csv::Reader::from_reader(data);
    let mut catalog = Catalog::new();

    for (i, row) in reader.deserialize::<CatalogRecord>().enumerate() {
        let row_number = i + 2;
        let record = row?;

        let price_text = record.price_per_unit.trim();
        let unit_price =
            price_text
                .parse::<Decimal>()
                .map_err(|e| PricerError::CatalogError {
                    row: row_number,
                    message: format!("invalid price '{}': {}", price_text, e),
                })?;

        catalog.insert(CatalogEntry {
            store: record.store.trim().to_lowercase(),
            item: record.item.trim().to_lowercase(),
            unit_price,
            unit: record.unit.trim().to_string(),
        });
    }

    Ok(catalog)
}
