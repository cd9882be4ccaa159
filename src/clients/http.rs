use crate::config::Settings;
use crate::error::Result;
use crate::search::params::QueryParams;
use rquest::{Client, Response};
use rquest_util::Emulation;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper over the rquest client: browser emulation, the configured
/// header set on every request, and a hard 30s connect/read timeout.
pub struct HttpClient {
    client: Client,
    headers: Vec<(String, String)>,
}

impl HttpClient {
    pub fn new(settings: &Settings, emulation: Emulation) -> Result<Self> {
        debug!(emulation = ?emulation, "Creating client");

        let client = Client::builder()
            .emulation(emulation)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let headers = settings
            .api
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self { client, headers })
    }

    pub async fn get(&self, url: &str, params: &QueryParams) -> Result<Response> {
        let mut request = self.client.get(url).query(params);

        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        debug!(url = url, "Sending GET request");

        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        Ok(response.error_for_status()?)
    }
}
