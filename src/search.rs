//! Keyword search.
//!
//! The GraphQL search query is the primary path. When it errors out, or
//! comes back empty, the rendered search-results page is scraped through
//! the same embedded-data extractor the profile path uses.

use serde_json::json;
use tracing::{error, info, warn};

use crate::core::client::{DOC_ID_SEARCH, ThreadsClient};
use crate::core::error::ThreadsError;
use crate::core::models::Post;
use crate::core::raw::RawThreadItem;
use crate::{extract, graphql, parser};

/// Default result cap for one search.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Builder for searching public threads by keyword.
pub struct KeywordSearchBuilder {
    client: ThreadsClient,
    keyword: String,
    limit: usize,
}

impl KeywordSearchBuilder {
    pub fn new(client: &ThreadsClient, keyword: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            keyword: keyword.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Cap the number of returned results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Fetch raw thread items matching the keyword.
    ///
    /// Never errors: a failed or empty API query falls back to the page
    /// scrape, and a failed page scrape degrades to an empty result with
    /// a logged error.
    pub async fn fetch_raw(self) -> Vec<RawThreadItem> {
        match self.search_via_graphql().await {
            Ok(items) if !items.is_empty() => {
                info!(keyword = %self.keyword, count = items.len(), "search api returned results");
                return items;
            }
            Ok(_) => {
                info!(keyword = %self.keyword, "search api returned nothing, scraping search page")
            }
            Err(e) => {
                warn!(keyword = %self.keyword, error = %e, "search api failed, scraping search page")
            }
        }

        match self.scrape_search_page().await {
            Ok(items) => {
                info!(keyword = %self.keyword, count = items.len(), "scraped search page");
                items
            }
            Err(e) => {
                error!(keyword = %self.keyword, error = %e, "search page scrape failed");
                Vec::new()
            }
        }
    }

    /// Fetch and parse into canonical posts. Keyword results carry no
    /// queried username, so authors missing from the payload stay empty.
    pub async fn fetch(self) -> Vec<Post> {
        let raw = self.fetch_raw().await;
        parser::parse_items(&raw, "")
    }

    async fn search_via_graphql(&self) -> Result<Vec<RawThreadItem>, ThreadsError> {
        let variables = json!({
            "query": self.keyword,
            "search_surface": "default",
            "__relay_internal__pv__BarcelonaIsLoggedInrelayprovider": false,
        });
        let response = self.client.graphql(DOC_ID_SEARCH, &variables).await?;
        Ok(graphql::search_thread_items(&response, self.limit))
    }

    async fn scrape_search_page(&self) -> Result<Vec<RawThreadItem>, ThreadsError> {
        let url = self.client.base_url().join("search")?;
        let page = self
            .client
            .fetch_page(url, &[("q", &self.keyword), ("serp_type", "default")])
            .await?;
        Ok(extract::extract_thread_items(
            &page,
            self.limit,
            self.client.extract_options(),
        ))
    }
}
