use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::WeatherConfig;
use crate::error::FetchError;

/// Thin GET + JSON wrapper around the NWS API
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Arc<Client>,
    api_base: String,
}

impl NwsClient {
    /// Creates a client sending the configured user agent and `Accept: application/json`
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Alerts-by-area resource for an already normalized region code
    pub fn alerts_url(&self, state: &str) -> String {
        format!("{}/alerts?area={}", self.api_base, urlencoding::encode(state))
    }

    /// Point-lookup resource for a coordinate
    pub fn points_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/points/{:.4},{:.4}", self.api_base, latitude, longitude)
    }

    /// Makes a single HTTP GET request and deserializes the JSON response.
    ///
    /// Every failure is logged here; callers only need to know that it failed.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let result = self.try_fetch(url).await;
        if let Err(e) = &result {
            tracing::error!(url, error = %e, "NWS request failed");
        }
        result
    }

    async fn try_fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json::<T>().await.map_err(FetchError::Decode)
    }
}
