use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::search::SearchResult;

use super::query::contains_keywords;

impl super::SObjectRestClient {
    /// Execute a SOSL search.
    ///
    /// The statement must contain the keyword `FIND` in upper case; otherwise
    /// no request is sent. Duplicate entries are dropped, keeping the first occurrence.
    #[instrument(skip(self))]
    pub async fn search(&self, sosl: &str) -> Result<Vec<SearchResult>> {
        if !contains_keywords(sosl, &["FIND"]) {
            return Err(Error::invalid_argument("SOSL search must contain FIND"));
        }

        let url = self
            .client
            .rest_url(&format!("search?q={}", urlencoding::encode(sosl)));
        self.fetch_unique(&url).await
    }

    /// Records most recently viewed by the current user.
    #[instrument(skip(self))]
    pub async fn recent(&self) -> Result<Vec<SearchResult>> {
        let url = self.client.rest_url("recent/");
        self.fetch_unique(&url).await
    }

    async fn fetch_unique(&self, url: &str) -> Result<Vec<SearchResult>> {
        let response = self.client.execute(self.client.get(url)).await?;
        let results = SearchResult::parse_unique(response.text())?;
        debug!(count = results.len(), "search results");
        Ok(results)
    }
}
