//! Data behind each dashboard view.
//!
//! Every view is plain data: the terminal front end (or any other renderer)
//! decides how to draw it. All views serialize to JSON.

use data_loader::CleaningReport;
use insights::{RankedList, SummaryTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Countries shown on the map and in the revenue insights, with coordinates
pub const FEATURED_COUNTRIES: [(&str, f64, f64); 3] = [
    ("United States", 38.00, -97.00),
    ("India", 22.00, 77.00),
    ("United Kingdom", 54.00, -2.00),
];

/// Row counts and cleaning statistics
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub titles: usize,
    pub movies: usize,
    pub tv_shows: usize,
    pub cleaning: CleaningReport,
    pub revenue_countries: usize,
}

// =============================================================================
// World View
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// Title count and box office figures for one featured country
///
/// The money fields are `None` when the revenue table has no row for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRevenue {
    pub country: String,
    pub number_of_titles: u64,
    pub average_production_budget: Option<String>,
    pub total_worldwide_box_office: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldView {
    pub map_points: Vec<MapPoint>,
    /// Ten countries with the most titles
    pub top_countries: RankedList,
    pub revenue_insights: Vec<CountryRevenue>,
}

// =============================================================================
// Learn More
// =============================================================================

/// Topics selectable on the Learn More view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    ReleaseYear,
    Genre,
    FeaturedActors,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::ReleaseYear, Topic::Genre, Topic::FeaturedActors];

    pub fn label(&self) -> &'static str {
        match self {
            Topic::ReleaseYear => "Release Year",
            Topic::Genre => "Genre",
            Topic::FeaturedActors => "Featured Actors",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topic {
    type Err = String;

    /// Accepts the label ("Featured Actors") or a slug ("featured-actors")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Topic::ALL
            .into_iter()
            .find(|t| t.label().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| format!("unknown topic: {}", s))
    }
}

/// Titles released per year, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseYearView {
    pub series: Vec<(u16, u64)>,
    /// X-axis ticks every 15 years starting at the earliest year
    pub ticks: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreView {
    /// Top 10 Genre/Count rows
    pub top_genres: SummaryTable,
    /// Top 5, for the bar chart
    pub chart: Vec<(String, u64)>,
    /// Top 50 frequencies, for a word cloud
    pub word_cloud: Vec<(String, u64)>,
    pub most_popular: Option<(String, u64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub actor: String,
    pub appearances: u64,
    /// Percentage of the appearances of all slices
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorView {
    /// Top 10 Actor/Appearances rows, "Unknown" excluded
    pub top_actors: SummaryTable,
    pub pie: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "topic", rename_all = "snake_case")]
pub enum TopicView {
    ReleaseYear(ReleaseYearView),
    Genre(GenreView),
    FeaturedActors(ActorView),
}
