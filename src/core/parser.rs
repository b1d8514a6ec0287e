use crate::core::ShoppingList;
use rust_decimal::Decimal;

/// Character separating the item name from the quantity on each line.
pub const LIST_SEPARATOR: char = ',';

/// Parse free-text shopping-list input into item → quantity.
///
/// One "item, quantity" pair per line. Lines without a separator and lines
/// whose quantity fails to parse are dropped without surfacing an error.
/// Repeated item names keep their first position and take the last quantity.
pub fn parse_grocery_list(text: &str) -> ShoppingList {
    let mut list = ShoppingList::new();

    for line in text.trim().split('\n') {
        let Some((item, quantity)) = line.split_once(LIST_SEPARATOR) else {
            continue;
        };

        let item = item.trim().to_lowercase();
        if let Ok(quantity) = quantity.trim().parse::<Decimal>() {
            list.insert(item, quantity);
        }
    }

    list
}
