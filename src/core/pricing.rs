use crate::core::matcher::Matcher;
use crate::core::{Catalog, LineResult, RequestResult, ShoppingList};
use rust_decimal::Decimal;

/// Joins a parsed shopping list against the catalog.
///
/// A lookup miss is a normal outcome: the line comes back as `Unmatched`
/// carrying the matcher's suggestions, and pricing always completes no
/// matter how many lines miss.
pub struct PricingEngine {
    matcher: Matcher,
}

impl PricingEngine {
    pub fn new(matcher: Matcher) -> Self {
        Self { matcher }
    }

    pub fn price(&self, catalog: &Catalog, store: &str, list: &ShoppingList) -> RequestResult {
        let store = store.trim();
        let store_key = store.to_lowercase();

        let mut total = Decimal::ZERO;
        let mut lines = Vec::with_capacity(list.len());

        for (item, quantity) in list.iter() {
            match catalog.get(&store_key, item) {
                Some(entry) => {
                    let cost = entry.unit_price * *quantity;
                    total += cost;
                    lines.push(LineResult::Matched {
                        item: item.clone(),
                        quantity: *quantity,
                        unit: entry.unit.clone(),
                        cost,
                    });
                }
                None => {
                    let suggestions = self.matcher.suggest(item, &store_key, catalog);
                    lines.push(LineResult::Unmatched {
                        item: item.clone(),
                        suggestions,
                    });
                }
            }
        }

        RequestResult {
            store: store.to_string(),
            total,
            lines,
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(Matcher::default())
    }
}
