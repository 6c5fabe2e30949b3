//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::CatalogEntry;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitleTypeFilter::new(TitleType::Movie))
///     .add_filter(GenreSubstringFilter::new("drama"));
///
/// let matches = pipeline.apply(catalog.entries().iter().collect())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the rows.
    ///
    /// ## Algorithm
    /// 1. Start with the input rows
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply<'a>(&self, entries: Vec<&'a CatalogEntry>) -> Result<Vec<&'a CatalogEntry>> {
        let mut current = entries;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GenreSubstringFilter, TitleTypeFilter};
    use crate::test_support::entry;
    use data_loader::TitleType;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let rows = vec![
            entry(TitleType::Movie, "A", "Dramas"),
            entry(TitleType::TvShow, "B", "Comedies"),
        ];

        let filtered = pipeline.apply(rows.iter().collect()).unwrap();
        assert!(pipeline.is_empty());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_chained_filters() {
        let rows = vec![
            entry(TitleType::Movie, "A", "Dramas"),
            entry(TitleType::Movie, "B", "Comedies"),
            entry(TitleType::TvShow, "C", "TV Dramas"),
        ];

        let pipeline = FilterPipeline::new()
            .add_filter(TitleTypeFilter::new(TitleType::Movie))
            .add_filter(GenreSubstringFilter::new("drama"));

        let filtered = pipeline.apply(rows.iter().collect()).unwrap();
        assert_eq!(pipeline.len(), 2);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "A");
    }
}
