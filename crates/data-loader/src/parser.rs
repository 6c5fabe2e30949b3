//! Parser for the Netflix titles CSV file.
//!
//! The file has a header row with (at least) these columns:
//! type, title, director, cast, country, date_added, release_year,
//! rating, duration, listed_in
//!
//! Rust concepts you'll learn here:
//! - Streaming deserialization with the `csv` crate and serde
//! - Mapping library errors into our own error type
//! - Generic readers (`impl Read`) so tests can parse in-memory data

use crate::error::{DataLoadError, Result};
use crate::types::RawCatalogRow;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Formats accepted for `date_added`, tried in order.
///
/// The dataset uses "September 25, 2021"; the others cover re-exported copies.
const DATE_FORMATS: [&str; 4] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Parse the catalog CSV at `path`
pub fn parse_catalog_csv(path: &Path) -> Result<Vec<RawCatalogRow>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_catalog_reader(file, &source_name)
}

/// Parse catalog rows from any reader
///
/// `source_name` only appears in error messages.
pub fn parse_catalog_reader<R: Read>(reader: R, source_name: &str) -> Result<Vec<RawCatalogRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize::<RawCatalogRow>() {
        let row = result.map_err(|e| DataLoadError::ParseError {
            file: source_name.to_string(),
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Parse a `date_added` value
///
/// Example: " September 25, 2021" -> Some(2021-09-25)
///          "soon" -> None
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}
