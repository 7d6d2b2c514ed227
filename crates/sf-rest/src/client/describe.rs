use tracing::instrument;

use crate::describe::{DescribeGlobal, DescribeLayout, DescribeSObject};
use crate::error::Result;

use super::sobject_path;

impl super::SObjectRestClient {
    /// Describe all sobject types available to the user.
    #[instrument(skip(self))]
    pub async fn describe_global(&self) -> Result<DescribeGlobal> {
        let url = self.client.rest_url(&sobject_path(&[])?);
        self.client.get_json(&url).await
    }

    /// Basic metadata and recently used records of one sobject type.
    #[instrument(skip(self))]
    pub async fn describe_sobject(&self, sobject_type: &str) -> Result<DescribeSObject> {
        let path = sobject_path(&[("sobject type", sobject_type)])?;
        let url = self.client.rest_url(&path);
        self.client.get_json(&url).await
    }

    /// Full field-level metadata of one sobject type.
    #[instrument(skip(self))]
    pub async fn describe_layout(&self, sobject_type: &str) -> Result<DescribeLayout> {
        let path = sobject_path(&[("sobject type", sobject_type)])?;
        let url = self.client.rest_url(&format!("{path}describe/"));
        self.client.get_json(&url).await
    }
}
