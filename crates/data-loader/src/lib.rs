//! # Data Loader Crate
//!
//! This crate loads and cleans the Netflix titles dataset.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CatalogEntry, TitleType, Column, Catalog)
//! - **parser**: Parse the CSV file into raw rows
//! - **cleaner**: Fill missing values and derive date columns
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/netflix_titles.csv"))?;
//! let (movies, shows) = catalog.counts();
//! println!("{} movies, {} TV shows", movies, shows);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod cleaner;

// Re-export commonly used types for convenience
pub use cleaner::clean;
pub use error::{DataLoadError, Result};
pub use types::{
    Catalog,
    CatalogEntry,
    CleaningReport,
    Column,
    RawCatalogRow,
    TitleType,
    NOT_RATED,
    UNKNOWN,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: TitleType, title: &str) -> CatalogEntry {
        CatalogEntry {
            kind,
            title: title.to_string(),
            director: UNKNOWN.to_string(),
            cast: UNKNOWN.to_string(),
            country: UNKNOWN.to_string(),
            date_added: None,
            release_year: 2000,
            rating: NOT_RATED.to_string(),
            duration: Some("90 min".to_string()),
            listed_in: "Dramas".to_string(),
            year_added: None,
            month_added: None,
            month_name: None,
            year_month: None,
        }
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.counts(), (0, 0));
    }

    #[test]
    fn test_catalog_counts() {
        let catalog = Catalog::from_entries(vec![
            entry(TitleType::Movie, "A"),
            entry(TitleType::TvShow, "B"),
            entry(TitleType::Movie, "C"),
        ]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.counts(), (2, 1));
        assert_eq!(catalog.get(1).unwrap().title, "B");
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_title_type_from_str() {
        assert_eq!("movie".parse::<TitleType>().unwrap(), TitleType::Movie);
        assert_eq!("TV SHOW".parse::<TitleType>().unwrap(), TitleType::TvShow);
        assert!("documentary".parse::<TitleType>().is_err());
        assert_eq!(TitleType::TvShow.to_string(), "TV Show");
    }

    #[test]
    fn test_field_access() {
        let e = entry(TitleType::TvShow, "B");
        assert_eq!(e.field(Column::Type).as_deref(), Some("TV Show"));
        assert_eq!(e.field(Column::ReleaseYear).as_deref(), Some("2000"));
        assert_eq!(e.field(Column::YearMonth), None);
    }
}
