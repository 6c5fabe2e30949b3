//! Errors from fetching or parsing the revenue page.

use thiserror::Error;

/// Errors that can occur when loading revenue data
#[derive(Error, Debug)]
pub enum RevenueError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The table exists but lacks a column we need
    #[error("Revenue table has no {column} column")]
    MissingColumn { column: String },

    /// A data row has a different number of cells than the header
    #[error("Row {row} has {found} cells, expected {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid selector: {0}")]
    Selector(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RevenueError>;
