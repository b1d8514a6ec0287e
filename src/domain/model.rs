use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One price point: (store, item) → (unit price, unit label).
/// Store and item are normalized (trimmed, lowercased) before they land here;
/// the unit label is trimmed but keeps its original casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub store: String,
    pub item: String,
    pub unit_price: Decimal,
    pub unit: String,
}

/// The full price table, built once at startup and read-only afterwards.
///
/// Iteration order is file row order. Later rows with the same (store, item)
/// key overwrite the earlier entry in place, so the first occurrence keeps
/// its position and the last value wins.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<(String, String), usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: CatalogEntry) {
        let key = (entry.store.clone(), entry.item.clone());
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, store: &str, item: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&(store.to_string(), item.to_string()))
            .map(|&pos| &self.entries[pos])
    }

    /// All entries in insertion (file row) order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Item names carried by one store, in catalog order.
    pub fn items_for_store<'a>(&'a self, store: &str) -> Vec<&'a str> {
        self.entries
            .iter()
            .filter(|e| e.store == store)
            .map(|e| e.item.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store_count(&self) -> usize {
        let mut stores: Vec<&str> = self.entries.iter().map(|e| e.store.as_str()).collect();
        stores.sort_unstable();
        stores.dedup();
        stores.len()
    }
}

/// Parsed shopping list: item name → quantity, in first-seen order.
/// Repeated item names overwrite the quantity in place (no summation).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShoppingList {
    lines: Vec<(String, Decimal)>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: String, quantity: Decimal) {
        match self.lines.iter_mut().find(|(name, _)| *name == item) {
            Some((_, qty)) => *qty = quantity,
            None => self.lines.push((item, quantity)),
        }
    }

    pub fn get(&self, item: &str) -> Option<Decimal> {
        self.lines
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, qty)| *qty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Decimal)> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Outcome for a single shopping-list line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LineResult {
    Matched {
        item: String,
        quantity: Decimal,
        unit: String,
        cost: Decimal,
    },
    Unmatched {
        item: String,
        suggestions: Vec<String>,
    },
}

/// Result of pricing one submitted list against one store.
#[derive(Debug, Clone, Serialize)]
pub struct RequestResult {
    /// Store name as submitted (trimmed, original casing).
    pub store: String,
    /// Exact sum of matched line costs.
    pub total: Decimal,
    /// One entry per shopping-list line, in list order.
    pub lines: Vec<LineResult>,
}
