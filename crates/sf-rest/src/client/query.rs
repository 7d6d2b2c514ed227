use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::query::QueryResult;

impl super::SObjectRestClient {
    /// Execute a SOQL query and return the first page of results.
    ///
    /// The statement must contain the keywords `SELECT` and `FROM` in upper
    /// case; otherwise no request is sent. Further pages are not fetched.
    #[instrument(skip(self))]
    pub async fn query(&self, soql: &str) -> Result<QueryResult> {
        if !contains_keywords(soql, &["SELECT", "FROM"]) {
            return Err(Error::invalid_argument(
                "SOQL query must contain SELECT and FROM",
            ));
        }

        let url = self
            .client
            .rest_url(&format!("query?q={}", urlencoding::encode(soql)));
        let response = self.client.execute(self.client.get(&url)).await?;
        let result = QueryResult::from_json(response.text())?;
        debug!(
            total_size = result.total_size,
            done = result.done,
            "query returned {} records",
            result.len()
        );
        Ok(result)
    }
}

/// Every keyword appears somewhere in `statement`, matched case-sensitively.
pub(super) fn contains_keywords(statement: &str, keywords: &[&str]) -> bool {
    keywords.iter().all(|k| statement.contains(k))
}
