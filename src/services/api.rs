use crate::clients::HttpClient;
use crate::error::{Error, Result};
use crate::search::params::QueryParams;
use tracing::{debug, error};

pub struct ApiService {
    client: HttpClient,
    base_url: String,
}

impl ApiService {
    pub fn new(client: HttpClient, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetches one page of search results as raw JSON. Transport failures
    /// and the 30s timeout surface as errors; there is no retry.
    pub async fn fetch_jobs(&self, params: &QueryParams) -> Result<serde_json::Value> {
        let response = self.client.get(&self.base_url, params).await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Search API response received"
        );

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                error = %e,
                body = %body_str,
                "Failed to parse search response"
            );
            Error::from(e)
        })
    }
}
