use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::{config::Config, models::SearchResult};

// Nominatim's usage policy requires an identifying agent on every call.
const USER_AGENT: &str = "map-navigator-demo";

const RESULT_LIMIT: u32 = 6;

/// Geocoding client errors
#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed provider response: {0}")]
    Decode(String),

    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for GeocodingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err)
        }
    }
}

/// Client for the Nominatim search endpoint.
#[derive(Debug)]
pub struct GeocodingService {
    client: Client,
    base_url: String,
}

impl GeocodingService {
    pub fn new(config: &Config) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(GeocodingError::Request)?;

        Ok(Self {
            client,
            base_url: config.nominatim_url.clone(),
        })
    }

    /// Look up place candidates for a free-text query.
    ///
    /// The query text is forwarded untouched. The response is decoded into
    /// at most six trimmed [`SearchResult`] records, kept in the provider's
    /// relevance order.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, GeocodingError> {
        let url = format!("{}/search", self.base_url);
        let limit = RESULT_LIMIT.to_string();

        debug!(query = %query, "Querying geocoding provider");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodingError::Status(response.status()));
        }

        let results: Vec<SearchResult> = response.json().await?;
        Ok(results)
    }
}
