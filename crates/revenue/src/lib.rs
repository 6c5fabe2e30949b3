//! Revenue data scraped from an external box office page.
//!
//! This crate fetches one HTML page and turns its first table into a
//! per-country `RevenueTable`. It handles:
//! - Building an HTTP client with a browser user agent
//! - Selecting the table, header and data cells with CSS selectors
//! - Treating a page without a table as "no revenue data"
//!
//! ## Example Usage
//! ```ignore
//! use revenue::{RevenueFetcher, DEFAULT_REVENUE_URL};
//!
//! let table = RevenueFetcher::new(DEFAULT_REVENUE_URL)?.fetch().await?;
//! if let Some(us) = table.get("United States") {
//!     println!("{}", us.total_worldwide_box_office);
//! }
//! ```

pub mod error;
pub mod fetcher;
pub mod table;

pub use error::{Result, RevenueError};
pub use fetcher::{DEFAULT_REVENUE_URL, RevenueFetcher};
pub use table::{RevenueRecord, RevenueTable, parse_revenue_html};
