//! Dashboard crate for the Netflix explorer.
//!
//! This crate ties the catalog, the aggregations, the recommender and the
//! revenue table together into the views a front end renders.

pub mod explorer;
pub mod views;

pub use explorer::Dashboard;
pub use views::{
    ActorView, CatalogSummary, CountryRevenue, FEATURED_COUNTRIES, GenreView, MapPoint, PieSlice,
    ReleaseYearView, Topic, TopicView, WorldView,
};
