use crate::core::{LineResult, RequestResult};
use rust_decimal::Decimal;

/// Title-case an item name for display: first letter of each alphabetic run
/// uppercased, the rest lowercased.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// "{Item Title Case} ({qty} {unit}): ${cost}"
pub fn matched_line(item: &str, quantity: Decimal, unit: &str, cost: Decimal) -> String {
    format!(
        "{} ({} {}): {}",
        title_case(item),
        quantity,
        unit,
        format_currency(cost)
    )
}

/// "{item} (Did you mean: ...?)" or "{item} (No suggestions)"
pub fn missed_line(item: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        format!("{} (No suggestions)", item)
    } else {
        format!("{} (Did you mean: {}?)", item, suggestions.join(", "))
    }
}

pub fn line_text(line: &LineResult) -> String {
    match line {
        LineResult::Matched {
            item,
            quantity,
            unit,
            cost,
        } => matched_line(item, *quantity, unit, *cost),
        LineResult::Unmatched { item, suggestions } => missed_line(item, suggestions),
    }
}

/// Matched lines of a result, rendered in order.
pub fn detail_lines(result: &RequestResult) -> Vec<String> {
    result
        .lines
        .iter()
        .filter(|line| matches!(line, LineResult::Matched { .. }))
        .map(line_text)
        .collect()
}

/// Unmatched lines of a result, rendered in order.
pub fn missing_lines(result: &RequestResult) -> Vec<String> {
    result
        .lines
        .iter()
        .filter(|line| matches!(line, LineResult::Unmatched { .. }))
        .map(line_text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chicken breast"), "Chicken Breast");
        assert_eq!(title_case("BACON"), "Bacon");
        assert_eq!(title_case("2% milk"), "2% Milk");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_matched_line_format() {
        assert_eq!(
            matched_line("bacon", dec("1"), "lb", dec("5.99")),
            "Bacon (1 lb): $5.99"
        );
        assert_eq!(
            matched_line("chicken breast", dec("1.5"), "lb", dec("4.5")),
            "Chicken Breast (1.5 lb): $4.50"
        );
    }

    #[test]
    fn test_missed_line_formats() {
        assert_eq!(
            missed_line("bakon", &["bacon".to_string(), "baco".to_string()]),
            "bakon (Did you mean: bacon, baco?)"
        );
        assert_eq!(missed_line("unicorn", &[]), "unicorn (No suggestions)");
    }

    #[test]
    fn test_currency_pads_to_two_places() {
        assert_eq!(format_currency(dec("5")), "$5.00");
        assert_eq!(format_currency(dec("5.9")), "$5.90");
        assert_eq!(format_currency(dec("5.999")), "$6.00");
    }

    #[test]
    fn test_detail_and_missing_split() {
        let result = RequestResult {
            store: "Winco".to_string(),
            total: dec("5.99"),
            lines: vec![
                LineResult::Matched {
                    item: "bacon".to_string(),
                    quantity: dec("1"),
                    unit: "lb".to_string(),
                    cost: dec("5.99"),
                },
                LineResult::Unmatched {
                    item: "bakon".to_string(),
                    suggestions: vec!["bacon".to_string()],
                },
            ],
        };

        assert_eq!(detail_lines(&result), vec!["Bacon (1 lb): $5.99"]);
        assert_eq!(
            missing_lines(&result),
            vec!["bakon (Did you mean: bacon?)"]
        );
    }
}
