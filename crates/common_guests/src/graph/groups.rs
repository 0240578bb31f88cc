//! Group lookups and membership changes.

use crate::graph::{GraphClient, GraphError};
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SiteUrlResponse {
    value: String,
}

impl GraphClient {
    /// Resolve the web URL of a group's root site, used as the invite
    /// redirect target. The token is passed in by the caller so the same
    /// token serves the whole invitation chain.
    ///
    /// # Errors
    /// * If the request can't be sent.
    /// * If the body can't be parsed.
    /// * If an unexpected status code is received.
    pub async fn group_site_url(&self, token: &str, group_id: &str) -> Result<String, GraphError> {
        let url = format!(
            "{}/v1.0/groups/{group_id}/sites/root/weburl",
            self.graph_base_url
        );
        let response = self.http.get(&url).bearer_auth(token).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body: SiteUrlResponse = response.json().await?;
                Ok(body.value)
            }
            status => {
                let text = response.text().await?;
                Err(GraphError::UnexpectedStatus { status, text })
            }
        }
    }

    /// Add a directory object to a group's members collection.
    ///
    /// The response body and status are not inspected; only transport
    /// failures surface.
    ///
    /// # Errors
    /// * If the request can't be sent.
    pub async fn add_group_member(
        &self,
        token: &str,
        group_id: &str,
        directory_object_id: &str,
    ) -> Result<(), GraphError> {
        let url = format!("{}/v1.0/groups/{group_id}/members/$ref", self.graph_base_url);
        let reference = serde_json::json!({
            "@odata.id": format!(
                "{}/v1.0/directoryObjects/{directory_object_id}",
                self.graph_base_url
            ),
        });

        self.http
            .post(&url)
            .bearer_auth(token)
            .json(&reference)
            .send()
            .await?;
        Ok(())
    }
}
