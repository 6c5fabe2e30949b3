//! Filter to keep only one kind of title (movies or TV shows).

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{CatalogEntry, TitleType};

/// Keeps only rows whose type equals the requested one.
///
/// User text such as "tv show" is matched case-insensitively when it is
/// parsed into a `TitleType`, so the comparison here is exact.
pub struct TitleTypeFilter {
    kind: TitleType,
}

impl TitleTypeFilter {
    pub fn new(kind: TitleType) -> Self {
        Self { kind }
    }
}

impl Filter for TitleTypeFilter {
    fn name(&self) -> &str {
        "TitleTypeFilter"
    }

    fn apply<'a>(&self, entries: Vec<&'a CatalogEntry>) -> Result<Vec<&'a CatalogEntry>> {
        Ok(entries
            .into_iter()
            .filter(|entry| entry.kind == self.kind)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entry;

    #[test]
    fn test_title_type_filter() {
        let rows = vec![
            entry(TitleType::Movie, "A", "Dramas"),
            entry(TitleType::TvShow, "B", "TV Dramas"),
            entry(TitleType::Movie, "C", "Comedies"),
        ];

        let shows = TitleTypeFilter::new(TitleType::TvShow)
            .apply(rows.iter().collect())
            .unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].title, "B");

        let movies = TitleTypeFilter::new("MOVIE".parse().unwrap())
            .apply(rows.iter().collect())
            .unwrap();
        assert_eq!(movies.len(), 2);
    }
}
