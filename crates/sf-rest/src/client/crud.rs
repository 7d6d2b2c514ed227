use sobjects_client::Response;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::record::{SObject, ID_FIELD};
use crate::sobject::MutationResult;

use super::sobject_path;

impl super::SObjectRestClient {
    /// Fetch a record by type and id.
    ///
    /// Every field in the response is kept, including `attributes`.
    #[instrument(skip(self))]
    pub async fn get(&self, sobject_type: &str, id: &str) -> Result<SObject> {
        let path = sobject_path(&[("sobject type", sobject_type), ("id", id)])?;
        let url = self.client.rest_url(&path);
        let response = self.client.execute(self.client.get(&url)).await?;
        SObject::from_json(sobject_type, response.text())
    }

    /// Create a record. All of its fields are sent.
    #[instrument(skip(self, sobject), fields(sobject_type = %sobject.sobject_type()))]
    pub async fn create(&self, sobject: &SObject) -> Result<MutationResult> {
        let path = sobject_path(&[("sobject type", sobject.sobject_type())])?;
        let url = self.client.rest_url(&path);
        let response = self.client.post_text(&url, sobject.to_json()?).await?;
        let result: MutationResult = response.json()?;
        debug!(id = ?result.id, success = result.success, "created record");
        Ok(result)
    }

    /// Update a record from its own `Id` field.
    ///
    /// The record's other fields are sent as a PATCH tunnelled through POST;
    /// `Id` itself (matched case-insensitively) is left out of the body.
    #[instrument(skip(self, sobject), fields(sobject_type = %sobject.sobject_type()))]
    pub async fn update(&self, sobject: &SObject) -> Result<MutationResult> {
        let id = sobject
            .id()
            .ok_or_else(|| Error::invalid_argument("record to update has no Id field"))?;
        let path = sobject_path(&[("sobject type", sobject.sobject_type()), ("id", id)])?;
        let url = self.client.rest_url(&format!("{path}?_HttpMethod=PATCH"));
        let body = sobject.to_json_without(&[ID_FIELD])?;

        let response = self.client.post_text(&url, body).await?;
        mutation_result(response, id)
    }

    /// Delete a record by type and id.
    #[instrument(skip(self))]
    pub async fn delete(&self, sobject_type: &str, id: &str) -> Result<MutationResult> {
        let path = sobject_path(&[("sobject type", sobject_type), ("id", id)])?;
        let url = self.client.rest_url(&path);
        let response = self.client.delete_request(&url).await?;
        mutation_result(response, id)
    }
}

/// A 204 carries no body; report success for the affected record.
fn mutation_result(response: Response, id: &str) -> Result<MutationResult> {
    if response.is_empty() {
        debug!(id, status = response.status(), "no content");
        return Ok(MutationResult::succeeded(id));
    }
    response.json()
}
