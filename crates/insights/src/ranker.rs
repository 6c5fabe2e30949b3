//! Ranking frequency maps.
//!
//! Sorting is stable, so tokens with equal counts stay in the order they
//! were first encountered.

use crate::aggregator::Aggregator;
use crate::frequency::FrequencyMap;
use data_loader::{Catalog, Column};
use serde::Serialize;

/// (token, count) pairs ordered by count, highest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedList {
    entries: Vec<(String, u64)>,
}

impl RankedList {
    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    /// The first `n` entries (all of them if `n` is larger)
    pub fn top(&self, n: usize) -> &[(String, u64)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn first(&self) -> Option<&(String, u64)> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A two-column table (token, count) for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTable {
    pub key_label: String,
    pub count_label: String,
    pub rows: Vec<(String, u64)>,
}

impl SummaryTable {
    /// The first `n` rows as a new table
    pub fn head(&self, n: usize) -> SummaryTable {
        SummaryTable {
            key_label: self.key_label.clone(),
            count_label: self.count_label.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

/// Rank every entry of `freq`
pub fn rank(freq: &FrequencyMap) -> RankedList {
    let mut entries: Vec<(String, u64)> = freq.iter().map(|(t, c)| (t.to_string(), c)).collect();
    // sort_by is stable: ties keep encounter order
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    RankedList { entries }
}

/// The `n` most frequent tokens; never more than `freq.len()`
pub fn top_n(freq: &FrequencyMap, n: usize) -> RankedList {
    let mut ranked = rank(freq);
    ranked.entries.truncate(n);
    ranked
}

/// Full ranking plus the same data as a labelled table
pub fn summary_table(
    freq: &FrequencyMap,
    key_label: &str,
    count_label: &str,
) -> (RankedList, SummaryTable) {
    let ranked = rank(freq);
    let table = SummaryTable {
        key_label: key_label.to_string(),
        count_label: count_label.to_string(),
        rows: ranked.entries.clone(),
    };
    (ranked, table)
}

/// Top `top_n` genres and the full Genre/Count table
pub fn genre_summary(
    aggregator: &Aggregator,
    catalog: &Catalog,
    top_n: usize,
) -> (RankedList, SummaryTable) {
    let counts = aggregator.count(Column::ListedIn, catalog);
    let (mut ranked, table) = summary_table(&counts, "Genre", "Count");
    ranked.entries.truncate(top_n);
    (ranked, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(pairs: &[(&str, u64)]) -> FrequencyMap {
        pairs.iter().map(|&(t, c)| (t, c)).collect()
    }

    #[test]
    fn test_top_n_keeps_tie_order() {
        let map = freq(&[("A", 3), ("B", 3), ("C", 1)]);
        let top = top_n(&map, 2);
        assert_eq!(
            top.entries(),
            &[("A".to_string(), 3), ("B".to_string(), 3)]
        );
    }

    #[test]
    fn test_top_n_sorted_descending() {
        let map = freq(&[("x", 1), ("y", 7), ("z", 4), ("w", 7), ("v", 2)]);
        let top = top_n(&map, 4);

        assert_eq!(top.len(), 4);
        for pair in top.entries().windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(top.first().unwrap().0, "y");
    }

    #[test]
    fn test_top_n_larger_than_map() {
        let map = freq(&[("a", 1), ("b", 2)]);
        assert_eq!(top_n(&map, 10).len(), 2);
        assert!(top_n(&FrequencyMap::new(), 3).is_empty());
        assert!(top_n(&map, 0).is_empty());
    }

    #[test]
    fn test_summary_table() {
        let map = freq(&[("Comedies", 2), ("Dramas", 5)]);
        let (ranked, table) = summary_table(&map, "Genre", "Count");

        assert_eq!(ranked.len(), 2);
        assert_eq!(table.key_label, "Genre");
        assert_eq!(table.rows[0], ("Dramas".to_string(), 5));
        assert_eq!(table.head(1).rows.len(), 1);
        assert_eq!(ranked.top(1), &table.rows[..1]);
    }
}
