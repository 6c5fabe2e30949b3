//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to catalog rows.

use anyhow::Result;
use data_loader::CatalogEntry;

/// Core trait for filtering catalog rows.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared behind an `Arc`
/// - Filters take ownership of the Vec of borrowed rows and return a filtered Vec
/// - Rows are borrowed from the Catalog, so nothing is cloned while filtering
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of rows.
    ///
    /// # Arguments
    /// * `entries` - The rows to filter (takes ownership of the Vec)
    ///
    /// # Returns
    /// * `Ok(Vec<&CatalogEntry>)` - The rows that passed, in input order
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, entries: Vec<&'a CatalogEntry>) -> Result<Vec<&'a CatalogEntry>>;
}
