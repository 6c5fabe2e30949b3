//! Frequency counting over catalog columns.
//!
//! ## Algorithm
//! For each entry:
//! 1. Read the requested column (absent values count as "Unknown")
//! 2. Multi-valued columns: split on ',' and trim every token
//! 3. Single-valued columns: the raw value is the token
//! 4. Increment each token by one
//!
//! Which columns are multi-valued is configuration on the Aggregator rather
//! than string checks at the call site.

use crate::frequency::FrequencyMap;
use data_loader::{Catalog, CatalogEntry, Column, UNKNOWN};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Columns holding comma-separated lists in the Netflix dataset
pub const DEFAULT_MULTI_VALUED: [Column; 3] = [Column::Country, Column::Cast, Column::ListedIn];

/// Builds frequency maps for catalog columns
#[derive(Debug, Clone)]
pub struct Aggregator {
    multi_valued: HashSet<Column>,
    missing_token: String,
}

impl Aggregator {
    /// Create an aggregator treating country, cast and listed_in as lists
    pub fn new() -> Self {
        Self {
            multi_valued: DEFAULT_MULTI_VALUED.into_iter().collect(),
            missing_token: UNKNOWN.to_string(),
        }
    }

    /// Replace the set of multi-valued columns
    pub fn with_multi_valued(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.multi_valued = columns.into_iter().collect();
        self
    }

    /// Token used for absent values (default: "Unknown")
    pub fn with_missing_token(mut self, token: impl Into<String>) -> Self {
        self.missing_token = token.into();
        self
    }

    pub fn is_multi_valued(&self, column: Column) -> bool {
        self.multi_valued.contains(&column)
    }

    /// Count tokens of `column` over the whole catalog
    #[instrument(skip(self, catalog), fields(rows = catalog.len()))]
    pub fn count(&self, column: Column, catalog: &Catalog) -> FrequencyMap {
        let counts = self.count_entries(column, catalog.entries());
        debug!("Counted {} distinct tokens in {}", counts.len(), column);
        counts
    }

    /// Count tokens of `column` over any set of entries
    pub fn count_entries<'a, I>(&self, column: Column, entries: I) -> FrequencyMap
    where
        I: IntoIterator<Item = &'a CatalogEntry>,
    {
        let split = self.is_multi_valued(column);
        let mut counts = FrequencyMap::new();

        for entry in entries {
            let value = entry.field(column);
            let value = value.as_deref().unwrap_or(self.missing_token.as_str());

            if split {
                for token in value.split(',') {
                    counts.add(token.trim());
                }
            } else {
                counts.add(value);
            }
        }

        counts
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{NOT_RATED, TitleType};

    fn entry(cast: &str, country: &str, year: u16) -> CatalogEntry {
        CatalogEntry {
            kind: TitleType::Movie,
            title: "T".to_string(),
            director: UNKNOWN.to_string(),
            cast: cast.to_string(),
            country: country.to_string(),
            date_added: None,
            release_year: year,
            rating: NOT_RATED.to_string(),
            duration: None,
            listed_in: "Dramas".to_string(),
            year_added: None,
            month_added: None,
            month_name: None,
            year_month: None,
        }
    }

    #[test]
    fn test_cast_tokens_are_split_and_trimmed() {
        let catalog = Catalog::from_entries(vec![
            entry("A, B", "US", 2000),
            entry("B", "US", 2000),
            entry("", "US", 2000),
        ]);

        let counts = Aggregator::new().count(Column::Cast, &catalog);
        assert_eq!(counts.get("A"), Some(1));
        assert_eq!(counts.get("B"), Some(2));
        assert_eq!(counts.get(""), Some(1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_multi_valued_total_matches_token_occurrences() {
        let catalog = Catalog::from_entries(vec![
            entry("x", "United States, India", 2000),
            entry("x", "India", 2001),
            entry("x", "United Kingdom,  United States ,France", 2001),
        ]);

        let counts = Aggregator::new().count(Column::Country, &catalog);
        let expected: usize = catalog
            .entries()
            .iter()
            .map(|e| e.country.split(',').count())
            .sum();
        assert_eq!(counts.total(), expected as u64);
        assert_eq!(counts.get("United States"), Some(2));
        assert_eq!(counts.get("India"), Some(2));
    }

    #[test]
    fn test_single_valued_total_matches_row_count() {
        let catalog = Catalog::from_entries(vec![
            entry("x", "US", 2000),
            entry("x", "US", 2001),
            entry("x", "US", 2001),
        ]);

        let counts = Aggregator::new().count(Column::ReleaseYear, &catalog);
        assert_eq!(counts.total(), catalog.len() as u64);
        assert_eq!(counts.get("2001"), Some(2));
    }

    #[test]
    fn test_absent_values_use_missing_token() {
        let catalog = Catalog::from_entries(vec![entry("x", "US", 2000)]);

        let counts = Aggregator::new().count(Column::YearMonth, &catalog);
        assert_eq!(counts.get(UNKNOWN), Some(1));
    }

    #[test]
    fn test_custom_missing_token() {
        let catalog = Catalog::from_entries(vec![entry("x", "US", 2000), entry("y", "US", 2001)]);

        let counts = Aggregator::new()
            .with_missing_token("n/a")
            .count(Column::MonthName, &catalog);
        assert_eq!(counts.get("n/a"), Some(2));
        assert!(!counts.contains(UNKNOWN));
    }

    #[test]
    fn test_custom_multi_valued_set() {
        let catalog = Catalog::from_entries(vec![entry("A, B", "US", 2000)]);

        let aggregator = Aggregator::new().with_multi_valued([Column::Country]);
        assert!(!aggregator.is_multi_valued(Column::Cast));

        let counts = aggregator.count(Column::Cast, &catalog);
        assert_eq!(counts.get("A, B"), Some(1));
    }
}
