//! Core domain types for the Netflix titles dataset.
//!
//! This module defines the data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Enums for fixed sets of values (TitleType, Column)
//! - `Option<T>` for values that may be absent after parsing
//! - serde derives for CSV deserialization and JSON output
//! - `Cow<str>` to hand out borrowed or computed column values

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::DataLoadError;

/// Placeholder for missing director, cast and country values
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing rating
pub const NOT_RATED: &str = "Not Rated";

// =============================================================================
// Title Type
// =============================================================================

/// Whether a catalog entry is a movie or a TV show
///
/// The CSV spells these exactly `Movie` and `TV Show`; user input is matched
/// case-insensitively through `FromStr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleType {
    #[default]
    #[serde(rename = "Movie")]
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl TitleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleType::Movie => "Movie",
            TitleType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for TitleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TitleType {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "movie" => Ok(TitleType::Movie),
            "tv show" => Ok(TitleType::TvShow),
            _ => Err(DataLoadError::InvalidValue {
                field: "type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Raw and Cleaned Rows
// =============================================================================

/// One record exactly as it appears in the CSV file.
///
/// Empty fields deserialize to `None`. Columns not listed here
/// (`show_id`, `description`) are ignored by the reader.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCatalogRow {
    #[serde(rename = "type")]
    pub kind: TitleType,
    pub title: String,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: u16,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: String,
}

/// A cleaned catalog entry.
///
/// After cleaning, `director`, `cast`, `country` and `rating` always hold a
/// value (possibly a sentinel). The four calendar columns are `Some` exactly
/// when `date_added` is `Some`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub kind: TitleType,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: Option<NaiveDate>,
    pub release_year: u16,
    pub rating: String,
    /// Not sentinel-filled; a handful of source rows have no duration
    pub duration: Option<String>,
    /// Comma-separated genre names, e.g. "Dramas, International Movies"
    pub listed_in: String,

    // Derived from date_added
    pub year_added: Option<i32>,
    pub month_added: Option<u32>,
    pub month_name: Option<String>,
    /// "YYYY-MM"
    pub year_month: Option<String>,
}

impl CatalogEntry {
    /// Read one column of this entry as text.
    ///
    /// Returns `None` for the date columns when no date was parsed and for
    /// a missing duration. Numeric columns are rendered with `to_string`.
    pub fn field(&self, column: Column) -> Option<Cow<'_, str>> {
        match column {
            Column::Type => Some(Cow::Borrowed(self.kind.as_str())),
            Column::Title => Some(Cow::Borrowed(&self.title)),
            Column::Director => Some(Cow::Borrowed(&self.director)),
            Column::Cast => Some(Cow::Borrowed(&self.cast)),
            Column::Country => Some(Cow::Borrowed(&self.country)),
            Column::DateAdded => self.date_added.map(|d| Cow::Owned(d.to_string())),
            Column::ReleaseYear => Some(Cow::Owned(self.release_year.to_string())),
            Column::Rating => Some(Cow::Borrowed(&self.rating)),
            Column::Duration => self.duration.as_deref().map(Cow::Borrowed),
            Column::ListedIn => Some(Cow::Borrowed(&self.listed_in)),
            Column::YearAdded => self.year_added.map(|y| Cow::Owned(y.to_string())),
            Column::MonthAdded => self.month_added.map(|m| Cow::Owned(m.to_string())),
            Column::MonthName => self.month_name.as_deref().map(Cow::Borrowed),
            Column::YearMonth => self.year_month.as_deref().map(Cow::Borrowed),
        }
    }
}

// =============================================================================
// Columns
// =============================================================================

/// Every column of a cleaned catalog, including the derived date parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Type,
    Title,
    Director,
    Cast,
    Country,
    DateAdded,
    ReleaseYear,
    Rating,
    Duration,
    ListedIn,
    YearAdded,
    MonthAdded,
    MonthName,
    YearMonth,
}

impl Column {
    /// Column name as used in the CSV header
    pub fn name(&self) -> &'static str {
        match self {
            Column::Type => "type",
            Column::Title => "title",
            Column::Director => "director",
            Column::Cast => "cast",
            Column::Country => "country",
            Column::DateAdded => "date_added",
            Column::ReleaseYear => "release_year",
            Column::Rating => "rating",
            Column::Duration => "duration",
            Column::ListedIn => "listed_in",
            Column::YearAdded => "year_added",
            Column::MonthAdded => "month_added",
            Column::MonthName => "month_name",
            Column::YearMonth => "year_month",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Cleaning Report
// =============================================================================

/// How many values the cleaner had to fill in or drop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub director_filled: usize,
    pub cast_filled: usize,
    pub country_filled: usize,
    pub rating_filled: usize,
    /// Dates that were missing or could not be parsed
    pub date_added_dropped: usize,
}

// =============================================================================
// Catalog - The In-Memory Table
// =============================================================================

/// The cleaned, position-keyed table of catalog entries.
///
/// Built once at startup and shared read-only (usually as `Arc<Catalog>`).
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) entries: Vec<CatalogEntry>,
    pub(crate) report: CleaningReport,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            report: CleaningReport::default(),
        }
    }

    /// All entries in file order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&CatalogEntry> {
        self.entries.get(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of (movies, tv shows)
    pub fn counts(&self) -> (usize, usize) {
        let movies = self
            .entries
            .iter()
            .filter(|e| e.kind == TitleType::Movie)
            .count();
        (movies, self.entries.len() - movies)
    }

    pub fn cleaning_report(&self) -> &CleaningReport {
        &self.report
    }

    /// Append an entry (used while building)
    pub(crate) fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }
}
