//! # Dashboard
//!
//! Assembles every view from the shared catalog:
//! 1. World View: top countries, map points, revenue insights
//! 2. Learn More: release years, genres, featured actors
//! 3. Recommendations: filtered random picks
//!
//! Nothing is cached. Each call recomputes its view from the catalog.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, instrument};

use data_loader::{Catalog, Column, TitleType, UNKNOWN};
use insights::{Aggregator, ranker};
use pipeline::{Recommendation, Recommender};
use revenue::RevenueTable;

use crate::views::*;

const TOP_COUNTRIES: usize = 10;
const TOP_GENRES: usize = 10;
const GENRE_CHART: usize = 5;
const WORD_CLOUD: usize = 50;
const TOP_ACTORS: usize = 10;
const PIE_SLICES: usize = 5;
const YEAR_TICK_STEP: usize = 15;

/// Entry point for every view
#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Arc<Catalog>,
    revenue: Arc<RevenueTable>,
    aggregator: Aggregator,
    recommender: Recommender,
}

impl Dashboard {
    /// Create a dashboard over a loaded catalog and revenue table
    ///
    /// Pass `RevenueTable::empty()` when no revenue data is available.
    pub fn new(catalog: Arc<Catalog>, revenue: RevenueTable) -> Self {
        info!(
            "Dashboard ready ({} titles, {} revenue rows)",
            catalog.len(),
            revenue.len()
        );
        Self {
            recommender: Recommender::new(catalog.clone()),
            aggregator: Aggregator::new(),
            revenue: Arc::new(revenue),
            catalog,
        }
    }

    pub fn summary(&self) -> CatalogSummary {
        let (movies, tv_shows) = self.catalog.counts();
        CatalogSummary {
            titles: self.catalog.len(),
            movies,
            tv_shows,
            cleaning: *self.catalog.cleaning_report(),
            revenue_countries: self.revenue.len(),
        }
    }

    /// Countries producing the most titles, with revenue for the featured ones
    #[instrument(skip(self))]
    pub fn world_view(&self) -> WorldView {
        let countries = self.aggregator.count(Column::Country, &self.catalog);
        let top_countries = ranker::top_n(&countries, TOP_COUNTRIES);

        let map_points = FEATURED_COUNTRIES
            .iter()
            .map(|&(country, lat, lon)| MapPoint {
                country: country.to_string(),
                lat,
                lon,
            })
            .collect();

        let revenue_insights: Vec<CountryRevenue> = top_countries
            .entries()
            .iter()
            .filter(|(country, _)| {
                FEATURED_COUNTRIES
                    .iter()
                    .any(|(featured, _, _)| *featured == country.as_str())
            })
            .map(|(country, count)| {
                let record = self.revenue.get(country);
                CountryRevenue {
                    country: country.clone(),
                    number_of_titles: *count,
                    average_production_budget: record
                        .map(|r| r.average_production_budget.clone()),
                    total_worldwide_box_office: record
                        .map(|r| r.total_worldwide_box_office.clone()),
                }
            })
            .collect();

        debug!("{} featured countries in the top {}", revenue_insights.len(), TOP_COUNTRIES);
        WorldView {
            map_points,
            top_countries,
            revenue_insights,
        }
    }

    /// Data for one Learn More topic
    pub fn learn_more(&self, topic: Topic) -> TopicView {
        match topic {
            Topic::ReleaseYear => TopicView::ReleaseYear(self.release_year_view()),
            Topic::Genre => TopicView::Genre(self.genre_view()),
            Topic::FeaturedActors => TopicView::FeaturedActors(self.actor_view()),
        }
    }

    /// Titles per release year, ascending
    #[instrument(skip(self))]
    pub fn release_year_view(&self) -> ReleaseYearView {
        let counts = self.aggregator.count(Column::ReleaseYear, &self.catalog);
        let by_year: BTreeMap<u16, u64> = counts
            .iter()
            .filter_map(|(year, count)| year.parse::<u16>().ok().map(|y| (y, count)))
            .collect();

        let ticks = match (by_year.keys().next(), by_year.keys().next_back()) {
            (Some(&min), Some(&max)) => (min..=max).step_by(YEAR_TICK_STEP).collect(),
            _ => Vec::new(),
        };

        ReleaseYearView {
            series: by_year.into_iter().collect(),
            ticks,
        }
    }

    /// Most featured genres
    #[instrument(skip(self))]
    pub fn genre_view(&self) -> GenreView {
        let (top_list, genre_table) =
            ranker::genre_summary(&self.aggregator, &self.catalog, TOP_GENRES);
        let top_genres = genre_table.head(TOP_GENRES);

        GenreView {
            chart: top_genres.rows.iter().take(GENRE_CHART).cloned().collect(),
            word_cloud: genre_table.rows.iter().take(WORD_CLOUD).cloned().collect(),
            most_popular: top_list.first().cloned(),
            top_genres,
        }
    }

    /// Most featured actors, ignoring titles without cast information
    #[instrument(skip(self))]
    pub fn actor_view(&self) -> ActorView {
        let mut actors = self.aggregator.count(Column::Cast, &self.catalog);
        actors.remove(UNKNOWN);

        let (ranked, table) = ranker::summary_table(&actors, "Actor", "Appearances");
        let top_actors = table.head(TOP_ACTORS);

        let slices = ranked.top(PIE_SLICES);
        let total: u64 = slices.iter().map(|(_, n)| n).sum();
        let pie = slices
            .iter()
            .map(|(actor, appearances)| PieSlice {
                actor: actor.clone(),
                appearances: *appearances,
                share: if total == 0 {
                    0.0
                } else {
                    *appearances as f64 * 100.0 / total as f64
                },
            })
            .collect();

        ActorView { top_actors, pie }
    }

    /// Random titles of `kind` whose genres mention `genre`
    pub fn recommend(&self, kind: TitleType, genre: &str, count: usize) -> Result<Recommendation> {
        self.recommender.recommend(kind, genre, count)
    }
}
