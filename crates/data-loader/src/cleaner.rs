//! Cleaning raw rows into the Catalog.
//!
//! This module turns parsed CSV rows into `CatalogEntry` values:
//! - Fill missing director/cast/country with a sentinel, rating with "Not Rated"
//! - Parse `date_added`; unparseable values become `None`
//! - Derive year, month, month name and "YYYY-MM" from the parsed date
//!
//! Cleaning never fails. Anything malformed degrades to an absent value.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use chrono::Datelike;
use std::path::Path;
use tracing::{debug, info, instrument};

impl Catalog {
    /// Load and clean the catalog CSV at `path`
    ///
    /// This is the main entry point used at startup. A missing file or a
    /// malformed record is returned as an error; missing values are not.
    #[instrument]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = parser::parse_catalog_csv(path)?;
        info!("Parsed {} rows from {}", raw.len(), path.display());

        let catalog = clean(raw, UNKNOWN);
        let (movies, shows) = catalog.counts();
        info!(
            "Catalog ready: {} movies, {} TV shows ({:?})",
            movies,
            shows,
            catalog.cleaning_report()
        );
        Ok(catalog)
    }
}

/// Clean every raw row, substituting `sentinel` for missing
/// director/cast/country values
pub fn clean(raw: Vec<RawCatalogRow>, sentinel: &str) -> Catalog {
    let mut catalog = Catalog::new();
    let mut report = CleaningReport::default();

    for row in raw {
        catalog.push(clean_row(row, sentinel, &mut report));
    }

    debug!("Cleaning report: {:?}", report);
    catalog.report = report;
    catalog
}

fn clean_row(row: RawCatalogRow, sentinel: &str, report: &mut CleaningReport) -> CatalogEntry {
    let director = fill(row.director, sentinel, &mut report.director_filled);
    let cast = fill(row.cast, sentinel, &mut report.cast_filled);
    let country = fill(row.country, sentinel, &mut report.country_filled);
    let rating = fill(row.rating, NOT_RATED, &mut report.rating_filled);

    let date_added = row.date_added.as_deref().and_then(parser::parse_date_added);
    if date_added.is_none() {
        report.date_added_dropped += 1;
    }

    CatalogEntry {
        kind: row.kind,
        title: row.title,
        director,
        cast,
        country,
        date_added,
        release_year: row.release_year,
        rating,
        duration: row.duration,
        listed_in: row.listed_in,
        year_added: date_added.map(|d| d.year()),
        month_added: date_added.map(|d| d.month()),
        month_name: date_added.map(|d| d.format("%B").to_string()),
        year_month: date_added.map(|d| d.format("%Y-%m").to_string()),
    }
}

/// Use `value` or fall back to `default`, counting the fallback
fn fill(value: Option<String>, default: &str, filled: &mut usize) -> String {
    match value {
        Some(v) => v,
        None => {
            *filled += 1;
            default.to_string()
        }
    }
}
