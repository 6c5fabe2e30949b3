//! HTTP client for the revenue page.

use crate::error::{Result, RevenueError};
use crate::table::{RevenueTable, parse_revenue_html};
use reqwest::Client;
use std::time::Duration;
use tracing::{info, instrument};

/// Country-level box office breakdown for 2025
pub const DEFAULT_REVENUE_URL: &str = "https://www.the-numbers.com/movies/country-breakdown/2025";

// The site serves an error page to clients without a browser user agent
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/120.0.0.0 Safari/537.36";

/// Downloads and parses the revenue table
pub struct RevenueFetcher {
    client: Client,
    url: String,
}

impl RevenueFetcher {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, 30)
    }

    pub fn with_timeout(url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the page once and parse its first table
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<RevenueTable> {
        info!("Fetching revenue page");
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(RevenueError::Status {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let html = response.text().await?;
        let table = parse_revenue_html(&html)?;
        info!("Loaded revenue data for {} countries", table.len());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        let fetcher = RevenueFetcher::new(DEFAULT_REVENUE_URL).unwrap();
        assert_eq!(fetcher.url(), DEFAULT_REVENUE_URL);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let fetcher = RevenueFetcher::with_timeout("http://127.0.0.1:9/", 2).unwrap();
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, RevenueError::Http(_)));
    }
}
