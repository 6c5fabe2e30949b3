//! The per-country revenue table and its HTML parser.
//!
//! The source page carries one table shaped like:
//!
//! | Country | NumberofMovies | AverageProductionBudget | TotalWorldwideBox Office |
//!
//! Header cells are `<th>`, data cells `<td>`. Only the country and the two
//! money columns are kept; `NumberofMovies` is dropped.

use crate::error::{Result, RevenueError};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::{debug, warn};

const COUNTRY: &str = "Country";
const BUDGET: &str = "AverageProductionBudget";
const BOX_OFFICE: &str = "TotalWorldwideBoxOffice";
const DROPPED: &str = "NumberofMovies";

/// Revenue figures for one country, kept as displayed (e.g. "$1,234,567")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueRecord {
    pub country: String,
    pub average_production_budget: String,
    pub total_worldwide_box_office: String,
}

/// Revenue records keyed by country, in page order
///
/// An empty table stands for "no revenue data available".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RevenueTable {
    headers: Vec<String>,
    records: Vec<RevenueRecord>,
}

impl RevenueTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Header names as found on the page, without `NumberofMovies`
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn get(&self, country: &str) -> Option<&RevenueRecord> {
        self.records.iter().find(|r| r.country == country)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<RevenueRecord> for RevenueTable {
    fn from_iter<I: IntoIterator<Item = RevenueRecord>>(iter: I) -> Self {
        Self {
            headers: vec![COUNTRY.to_string(), BUDGET.to_string(), BOX_OFFICE.to_string()],
            records: iter.into_iter().collect(),
        }
    }
}

/// Parse the first `<table>` of `html` into a RevenueTable
///
/// A page without a table yields an empty RevenueTable.
pub fn parse_revenue_html(html: &str) -> Result<RevenueTable> {
    let document = Html::parse_document(html);
    let table_sel = selector("table")?;
    let th_sel = selector("th")?;
    let tr_sel = selector("tr")?;
    let td_sel = selector("td")?;

    let Some(table) = document.select(&table_sel).next() else {
        warn!("No table found on revenue page; continuing without revenue data");
        return Ok(RevenueTable::empty());
    };

    let headers: Vec<String> = table.select(&th_sel).map(cell_text).collect();
    let country_idx = column_index(&headers, COUNTRY)?;
    let budget_idx = column_index(&headers, BUDGET)?;
    let box_office_idx = column_index(&headers, BOX_OFFICE)?;

    let mut records = Vec::new();
    for (row, tr) in table.select(&tr_sel).enumerate().skip(1) {
        let cells: Vec<String> = tr.select(&td_sel).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() != headers.len() {
            return Err(RevenueError::RowShape {
                row,
                expected: headers.len(),
                found: cells.len(),
            });
        }
        records.push(RevenueRecord {
            country: cells[country_idx].clone(),
            average_production_budget: cells[budget_idx].clone(),
            total_worldwide_box_office: cells[box_office_idx].clone(),
        });
    }

    debug!("Parsed {} revenue rows", records.len());
    Ok(RevenueTable {
        headers: headers
            .into_iter()
            .filter(|h| normalize(h) != normalize(DROPPED))
            .collect(),
        records,
    })
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| RevenueError::Selector(e.to_string()))
}

fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Header names on the page are inconsistently spaced
/// ("TotalWorldwideBox Office"), so compare without whitespace
fn normalize(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    let wanted = normalize(name);
    headers
        .iter()
        .position(|h| normalize(h) == wanted)
        .ok_or_else(|| RevenueError::MissingColumn {
            column: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table>
          <tr><th>Country</th><th>NumberofMovies</th><th>AverageProductionBudget</th><th>TotalWorldwideBox Office</th></tr>
          <tr><td>United States</td><td>512</td><td>$45,000,000</td><td>$9,100,000,000</td></tr>
          <tr><td> India </td><td>88</td><td>$3,200,000</td><td>$420,000,000</td></tr>
          <tr></tr>
          <tr><td>United Kingdom</td><td>61</td><td>$18,500,000</td><td>$1,050,000,000</td></tr>
        </table>
        <table><tr><th>Other</th></tr></table>
        </body></html>
    "#;

    #[test]
    fn test_parse_revenue_table() {
        let table = parse_revenue_html(PAGE).unwrap();

        assert_eq!(table.len(), 3);
        let india = table.get("India").unwrap();
        assert_eq!(india.average_production_budget, "$3,200,000");
        assert_eq!(india.total_worldwide_box_office, "$420,000,000");
        assert!(table.get("France").is_none());
    }

    #[test]
    fn test_number_of_movies_is_dropped() {
        let table = parse_revenue_html(PAGE).unwrap();
        assert_eq!(table.headers().len(), 3);
        assert!(!table.headers().iter().any(|h| h == "NumberofMovies"));
    }

    #[test]
    fn test_missing_table_is_empty() {
        let table = parse_revenue_html("<html><body><p>Nothing here</p></body></html>").unwrap();
        assert!(table.is_empty());
        assert!(table.headers().is_empty());
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let html = "<table><tr><th>Country</th><th>AverageProductionBudget</th><th>TotalWorldwideBoxOffice</th></tr></table>";
        let table = parse_revenue_html(html).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let html = "<table><tr><th>Country</th><th>Budget</th></tr><tr><td>India</td><td>1</td></tr></table>";
        let err = parse_revenue_html(html).unwrap_err();
        assert!(matches!(err, RevenueError::MissingColumn { .. }));
    }

    #[test]
    fn test_row_shape_mismatch() {
        let html = "<table>\
            <tr><th>Country</th><th>AverageProductionBudget</th><th>TotalWorldwideBoxOffice</th></tr>\
            <tr><td>India</td><td>$1</td></tr>\
            </table>";
        let err = parse_revenue_html(html).unwrap_err();
        assert!(matches!(err, RevenueError::RowShape { expected: 3, found: 2, .. }));
    }
}
