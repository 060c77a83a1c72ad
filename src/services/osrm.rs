use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{config::Config, models::RouteResult};

/// Routing client errors
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("request failed: {0}")]
    Request(reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The provider responded but reported a non-`Ok` code in the body. The
    /// raw payload is kept so the caller can surface it for diagnostics.
    #[error("provider reported an error")]
    Provider(Value),

    #[error("malformed provider response: {0}")]
    Decode(String),

    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for RoutingError {
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

/// OSRM response envelope; only the fields the relay consumes.
#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    routes: Vec<RouteResult>,
}

/// Client for the OSRM driving profile.
#[derive(Debug)]
pub struct RoutingService {
    client: Client,
    base_url: String,
}

impl RoutingService {
    pub fn new(config: &Config) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(RoutingError::Request)?;

        Ok(Self {
            client,
            base_url: config.osrm_url.clone(),
        })
    }

    // OSRM takes lon,lat pairs with the origin first; the inbound params are
    // lat-first, so the swap happens here and nowhere else.
    fn route_url(&self, from_lat: &str, from_lng: &str, to_lat: &str, to_lng: &str) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, from_lng, from_lat, to_lng, to_lat
        )
    }

    /// Compute a driving route between two coordinate pairs.
    ///
    /// Coordinates are forwarded exactly as the caller supplied them. Only
    /// the first route candidate of the provider's answer is returned.
    pub async fn route(
        &self,
        from_lat: &str,
        from_lng: &str,
        to_lat: &str,
        to_lng: &str,
    ) -> Result<RouteResult, RoutingError> {
        let url = self.route_url(from_lat, from_lng, to_lat, to_lng);

        debug!(url = %url, "Querying routing provider");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("overview", "full"),
                ("geometries", "geojson"),
                ("steps", "false"),
                ("alternatives", "false"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RoutingError::Status(response.status()));
        }

        // The body code check needs the raw payload for the error detail,
        // so decode through a Value before the typed step.
        let payload: Value = response.json().await?;
        if payload.get("code").and_then(Value::as_str) != Some("Ok") {
            return Err(RoutingError::Provider(payload));
        }

        let decoded: OsrmRouteResponse =
            serde_json::from_value(payload).map_err(|e| RoutingError::Decode(e.to_string()))?;

        let route = decoded
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::Decode("no routes in provider response".to_string()))?;

        if !route.is_valid() {
            return Err(RoutingError::Decode(
                "route fails basic sanity checks".to_string(),
            ));
        }

        Ok(route)
    }
}
