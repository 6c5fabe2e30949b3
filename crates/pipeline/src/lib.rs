//! Pipeline for filtering the catalog and sampling recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for row filtering
//! - FilterPipeline for composing filters
//! - Recommender for drawing random titles from the filtered rows
//!
//! ## Architecture
//! A recommendation request is processed in stages:
//! 1. TitleTypeFilter keeps movies or TV shows
//! 2. GenreSubstringFilter keeps rows whose genre list mentions the search text
//! 3. The Recommender samples the requested number of rows at random
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Recommender, Recommendation};
//! use data_loader::TitleType;
//!
//! let recommender = Recommender::new(catalog.clone());
//! match recommender.recommend(TitleType::Movie, "drama", 5)? {
//!     Recommendation::Found(titles) => { /* show titles */ }
//!     Recommendation::Empty { message } => { /* show warning */ }
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod recommender;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use recommender::{NO_RESULTS_MESSAGE, Recommendation, RecommendedTitle, Recommender};

#[cfg(test)]
pub(crate) mod test_support {
    use data_loader::{CatalogEntry, NOT_RATED, TitleType, UNKNOWN};

    pub fn entry(kind: TitleType, title: &str, listed_in: &str) -> CatalogEntry {
        let duration = match kind {
            TitleType::Movie => "95 min",
            TitleType::TvShow => "1 Season",
        };
        CatalogEntry {
            kind,
            title: title.to_string(),
            director: UNKNOWN.to_string(),
            cast: UNKNOWN.to_string(),
            country: UNKNOWN.to_string(),
            date_added: None,
            release_year: 2019,
            rating: NOT_RATED.to_string(),
            duration: Some(duration.to_string()),
            listed_in: listed_in.to_string(),
            year_added: None,
            month_added: None,
            month_name: None,
            year_month: None,
        }
    }
}
