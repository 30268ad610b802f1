use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::config::Config;
use crate::error::{Error, Result};

/// Source of raw observation payloads. The one real implementation is
/// [`PwsClient`]; tests substitute their own.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    async fn fetch_current(&self) -> Result<String>;
}

/// HTTP client for the station API. Issues a single best-effort GET per run;
/// no retries, no caching, transport-default timeout.
#[derive(Debug, Clone)]
pub struct PwsClient {
    config: Config,
    http: Client,
}

impl PwsClient {
    /// The caller must have validated `config`; empty values are not checked
    /// again here.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ObservationSource for PwsClient {
    async fn fetch_current(&self) -> Result<String> {
        let url = &self.config.api_base_url;
        tracing::debug!(%url, station_id = %self.config.station_id, "requesting current conditions");

        let res = self
            .http
            .get(url)
            .query(&[
                ("stationId", self.config.station_id.as_str()),
                ("format", "json"),
                ("units", self.config.units.as_str()),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.clone(),
                source,
            })?;

        let status = res.status();
        let body = res.text().await.map_err(Error::Read)?;

        if !status.is_success() {
            return Err(Error::Status {
                status,
                body: truncate_body(&body),
            });
        }

        tracing::debug!(%status, bytes = body.len(), "station response received");
        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
