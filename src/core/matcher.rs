use crate::core::Catalog;
use std::cmp::Ordering;

/// Default number of alternative item names proposed for a miss.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Minimum similarity ratio for a candidate to count as a near-match.
pub const DEFAULT_SIMILARITY_CUTOFF: f64 = 0.6;

/// Proposes catalog item names similar to an unmatched input name.
///
/// Two tiers: sequence similarity first (catches typos and near-matches),
/// substring containment as a fallback (catches partial entries like
/// "chicken" against "boneless chicken breast" that the ratio ranks too low).
#[derive(Debug, Clone)]
pub struct Matcher {
    max_suggestions: usize,
    cutoff: f64,
}

impl Matcher {
    pub fn new(max_suggestions: usize, cutoff: f64) -> Self {
        Self {
            max_suggestions,
            cutoff,
        }
    }

    /// Up to `max_suggestions` item names from `store`'s part of the catalog,
    /// ranked by descending similarity to `input` (ties keep catalog order).
    /// Empty result means no suggestions, not an error.
    pub fn suggest(&self, input: &str, store: &str, catalog: &Catalog) -> Vec<String> {
        if input.is_empty() {
            // an empty name would substring-match every candidate
            return Vec::new();
        }

        let candidates = catalog.items_for_store(store);

        let mut scored: Vec<(f64, &str)> = candidates
            .iter()
            .filter_map(|name| {
                let score = similarity_ratio(input, name);
                (score >= self.cutoff).then_some((score, *name))
            })
            .collect();

        if !scored.is_empty() {
            // stable sort: equal scores stay in catalog order
            scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
            return scored
                .into_iter()
                .take(self.max_suggestions)
                .map(|(_, name)| name.to_string())
                .collect();
        }

        candidates
            .into_iter()
            .filter(|name| name.contains(input))
            .take(self.max_suggestions)
            .map(str::to_string)
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUGGESTIONS, DEFAULT_SIMILARITY_CUTOFF)
    }
}

/// Ratcliff-Obershelp similarity: twice the total matched subsequence length
/// over the combined length, in [0.0, 1.0].
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let combined = a.len() + b.len();
    if combined == 0 {
        return 1.0;
    }
    2.0 * matching_len(&a, &b) as f64 / combined as f64
}

/// Total length of matching blocks: longest common substring, then recurse on
/// the pieces to its left and right. Ties keep the earliest match in `a`.
fn matching_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // longest common substring via a rolling run-length row
    let mut runs = vec![0usize; b.len() + 1];
    let (mut best_len, mut best_a, mut best_b) = (0usize, 0usize, 0usize);

    for (i, ca) in a.iter().enumerate() {
        let mut prev = 0;
        for (j, cb) in b.iter().enumerate() {
            let up_left = prev;
            prev = runs[j + 1];
            if ca == cb {
                let run = up_left + 1;
                runs[j + 1] = run;
                if run > best_len {
                    best_len = run;
                    best_a = i + 1 - run;
                    best_b = j + 1 - run;
                }
            } else {
                runs[j + 1] = 0;
            }
        }
    }

    if best_len == 0 {
        return 0;
    }

    best_len
        + matching_len(&a[..best_a], &b[..best_b])
        + matching_len(&a[best_a + best_len..], &b[best_b + best_len..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CatalogEntry;

    fn catalog(rows: &[(&str, &str)]) -> Catalog {
        let mut catalog = Catalog::new();
        for (store, item) in rows {
            catalog.insert(CatalogEntry {
                store: store.to_string(),
                item: item.to_string(),
                unit_price: "1.00".parse().unwrap(),
                unit: "lb".to_string(),
            });
        }
        catalog
    }

    #[test]
    fn test_ratio_known_values() {
        assert!((similarity_ratio("bakon", "bacon") - 0.8).abs() < 1e-9);
        assert!((similarity_ratio("bacon", "bacon") - 1.0).abs() < 1e-9);
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
        assert_eq!(similarity_ratio("", ""), 1.0);
        assert_eq!(similarity_ratio("", "bacon"), 0.0);
    }

    #[test]
    fn test_ratio_counts_all_matching_blocks() {
        // "ab" + "cd" match around the differing middle: 2*4/9
        assert!((similarity_ratio("abxcd", "abcd") - 8.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_suggests_close_match_for_typo() {
        let catalog = catalog(&[
            ("winco", "bacon"),
            ("winco", "broccoli"),
            ("winco", "chicken breast"),
        ]);
        let suggestions = Matcher::default().suggest("bakon", "winco", &catalog);
        assert_eq!(suggestions, vec!["bacon"]);
    }

    #[test]
    fn test_ranks_by_descending_score() {
        let catalog = catalog(&[
            ("winco", "bacon bits"),
            ("winco", "baco"),
            ("winco", "bacons"),
            ("winco", "bacon"),
        ]);
        let suggestions = Matcher::default().suggest("bacon", "winco", &catalog);
        // 1.0, then 10/11, then 8/9; "bacon bits" (10/15) is cut by the cap
        assert_eq!(suggestions, vec!["bacon", "bacons", "baco"]);
    }

    #[test]
    fn test_never_exceeds_max_suggestions() {
        let catalog = catalog(&[
            ("winco", "bacon"),
            ("winco", "bacons"),
            ("winco", "baco"),
            ("winco", "bacon bits"),
        ]);
        let suggestions = Matcher::new(2, 0.4).suggest("bacon", "winco", &catalog);
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_restricted_to_requested_store() {
        let catalog = catalog(&[("winco", "broccoli"), ("safeway", "bacon")]);
        let suggestions = Matcher::default().suggest("bakon", "winco", &catalog);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_substring_fallback_when_similarity_misses() {
        let catalog = catalog(&[("winco", "beef"), ("winco", "boneless chicken breast")]);
        // ratio("chicken", "boneless chicken breast") is well under the cutoff
        let suggestions = Matcher::default().suggest("chicken", "winco", &catalog);
        assert_eq!(suggestions, vec!["boneless chicken breast"]);
    }

    #[test]
    fn test_fallback_keeps_catalog_order_and_cap() {
        let catalog = catalog(&[
            ("winco", "spicy chicken wings marinated"),
            ("winco", "boneless chicken breast value pack"),
            ("winco", "whole roaster chicken family size"),
            ("winco", "ground chicken thigh bulk tray"),
        ]);
        let suggestions = Matcher::default().suggest("chicken", "winco", &catalog);
        assert_eq!(
            suggestions,
            vec![
                "spicy chicken wings marinated",
                "boneless chicken breast value pack",
                "whole roaster chicken family size",
            ]
        );
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let catalog = catalog(&[("winco", "ax"), ("winco", "ay")]);
        let suggestions = Matcher::new(3, 0.4).suggest("ab", "winco", &catalog);
        assert_eq!(suggestions, vec!["ax", "ay"]);
    }

    #[test]
    fn test_cutoff_is_respected() {
        let catalog = catalog(&[("winco", "baco"), ("winco", "bacons")]);
        // 8/9 and 10/11 both pass 0.6 but only 10/11 passes 0.9
        let suggestions = Matcher::new(3, 0.9).suggest("bacon", "winco", &catalog);
        assert_eq!(suggestions, vec!["bacons"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let catalog = catalog(&[("winco", "bacon")]);
        assert!(Matcher::default().suggest("", "winco", &catalog).is_empty());
    }

    #[test]
    fn test_no_candidates_yields_nothing() {
        let catalog = Catalog::new();
        assert!(Matcher::default()
            .suggest("bacon", "winco", &catalog)
            .is_empty());
    }
}
