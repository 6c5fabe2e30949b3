//! # Insights Crate
//!
//! Aggregate statistics over the cleaned catalog.
//!
//! ## Components
//!
//! ### Aggregator
//! Counts how often each value of a column occurs:
//! - Single-valued columns (type, rating, release_year, ...) count raw values
//! - Multi-valued columns (country, cast, listed_in) are split on commas
//!
//! ### Ranker
//! Orders frequency maps by count:
//! - `top_n` for "Top 10 Genres" style views
//! - `summary_table` for a labelled two-column table
//!
//! ## Example Usage
//!
//! ```ignore
//! use insights::{Aggregator, ranker};
//! use data_loader::{Catalog, Column};
//!
//! let aggregator = Aggregator::new();
//! let countries = aggregator.count(Column::Country, &catalog);
//! let top_ten = ranker::top_n(&countries, 10);
//! ```
//!
//! ## Learning Goals
//!
//! 1. **HashMap Operations**: counting with an index into an ordered Vec
//! 2. **Stable Sorting**: `sort_by` keeps ties in encounter order
//! 3. **Builder Pattern**: configurable multi-valued columns
//! 4. **Instrumentation**: tracing spans around each count

pub mod frequency;
pub mod aggregator;
pub mod ranker;

pub use aggregator::Aggregator;
pub use frequency::FrequencyMap;
pub use ranker::{RankedList, SummaryTable, genre_summary, rank, summary_table, top_n};

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Catalog, CatalogEntry, NOT_RATED, TitleType, UNKNOWN};

    fn entry(listed_in: &str) -> CatalogEntry {
        CatalogEntry {
            kind: TitleType::Movie,
            title: "T".to_string(),
            director: UNKNOWN.to_string(),
            cast: UNKNOWN.to_string(),
            country: UNKNOWN.to_string(),
            date_added: None,
            release_year: 2010,
            rating: NOT_RATED.to_string(),
            duration: None,
            listed_in: listed_in.to_string(),
            year_added: None,
            month_added: None,
            month_name: None,
            year_month: None,
        }
    }

    #[test]
    fn test_genre_summary() {
        let catalog = Catalog::from_entries(vec![
            entry("Dramas, International Movies"),
            entry("Comedies, Dramas"),
            entry("Documentaries"),
            entry("International Movies, Dramas"),
        ]);

        let (top, table) = genre_summary(&Aggregator::new(), &catalog, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top.entries()[0], ("Dramas".to_string(), 3));
        assert_eq!(top.entries()[1], ("International Movies".to_string(), 2));

        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.count_label, "Count");
        let total: u64 = table.rows.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 7);
    }
}
