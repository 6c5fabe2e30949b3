//! Filter to keep titles whose genre list mentions a search term.
//!
//! The term is matched as a case-insensitive substring of the raw
//! `listed_in` text, so "drama" matches both "Dramas" and "TV Dramas".

use crate::traits::Filter;
use anyhow::Result;
use data_loader::CatalogEntry;

/// Keeps rows whose `listed_in` contains the genre text.
///
/// An empty genre matches every row.
pub struct GenreSubstringFilter {
    needle: String,
}

impl GenreSubstringFilter {
    pub fn new(genre: &str) -> Self {
        Self {
            needle: genre.to_lowercase(),
        }
    }
}

impl Filter for GenreSubstringFilter {
    fn name(&self) -> &str {
        "GenreSubstringFilter"
    }

    fn apply<'a>(&self, entries: Vec<&'a CatalogEntry>) -> Result<Vec<&'a CatalogEntry>> {
        Ok(entries
            .into_iter()
            .filter(|entry| entry.listed_in.to_lowercase().contains(&self.needle))
            .collect())
    }
}
