//! Random recommendations from a filtered slice of the catalog.
//!
//! ## Algorithm
//! 1. Keep rows of the requested type
//! 2. Keep rows whose genre list contains the requested text
//! 3. Draw exactly `count` of them uniformly at random, without replacement
//! 4. Project each to (title, duration, release_year)
//!
//! Asking for more rows than matched is not an error: the caller gets
//! `Recommendation::Empty` with a message to show instead.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreSubstringFilter, TitleTypeFilter};
use anyhow::Result;
use data_loader::{Catalog, CatalogEntry, TitleType};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Shown when a selection matches fewer titles than requested
pub const NO_RESULTS_MESSAGE: &str =
    "No results found for your selection. Try another genre or type.";

/// One recommended title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendedTitle {
    pub title: String,
    pub duration: Option<String>,
    pub release_year: u16,
}

impl From<&CatalogEntry> for RecommendedTitle {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            title: entry.title.clone(),
            duration: entry.duration.clone(),
            release_year: entry.release_year,
        }
    }
}

/// Outcome of a recommendation request
///
/// Callers must branch on the variant; an `Empty` outcome is not the same
/// thing as `Found` with zero rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Sampled titles, in sampled order
    Found(Vec<RecommendedTitle>),
    /// Not enough matching titles to fill the request
    Empty { message: String },
}

impl Recommendation {
    pub fn titles(&self) -> Option<&[RecommendedTitle]> {
        match self {
            Recommendation::Found(titles) => Some(titles),
            Recommendation::Empty { .. } => None,
        }
    }

    pub fn is_empty_outcome(&self) -> bool {
        matches!(self, Recommendation::Empty { .. })
    }
}

/// Samples titles of a given type and genre from the shared catalog
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Recommend `count` titles using the thread-local RNG
    pub fn recommend(&self, kind: TitleType, genre: &str, count: usize) -> Result<Recommendation> {
        self.recommend_with_rng(kind, genre, count, &mut rand::rng())
    }

    /// Recommend `count` titles drawing from `rng` (seed it for repeatable picks)
    #[instrument(skip(self, rng))]
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        kind: TitleType,
        genre: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<Recommendation> {
        let pipeline = FilterPipeline::new()
            .add_filter(TitleTypeFilter::new(kind))
            .add_filter(GenreSubstringFilter::new(genre));

        let matches = pipeline.apply(self.catalog.entries().iter().collect())?;

        if matches.len() < count {
            warn!(
                "Only {} titles match, cannot sample {}",
                matches.len(),
                count
            );
            return Ok(Recommendation::Empty {
                message: NO_RESULTS_MESSAGE.to_string(),
            });
        }

        let picked = rand::seq::index::sample(rng, matches.len(), count);
        let titles: Vec<RecommendedTitle> = picked
            .iter()
            .map(|i| RecommendedTitle::from(matches[i]))
            .collect();

        debug!("Sampled {} of {} matching titles", titles.len(), matches.len());
        Ok(Recommendation::Found(titles))
    }
}
