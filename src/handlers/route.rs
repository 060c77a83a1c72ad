use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::{error::ApiError, models::RouteResult, Services};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    pub from_lat: Option<String>,
    pub from_lng: Option<String>,
    pub to_lat: Option<String>,
    pub to_lng: Option<String>,
}

/// Handle driving-route computation between two coordinate pairs.
///
/// Coordinates are accepted as text and forwarded as-is; `0` is a valid
/// latitude or longitude, only absent or empty parameters are rejected.
/// Provider-reported errors are echoed back under `detail`.
pub async fn compute_route(
    State((_, routing)): State<Services>,
    Query(params): Query<RouteParams>,
) -> Result<Json<RouteResult>, ApiError> {
    let (Some(from_lat), Some(from_lng), Some(to_lat), Some(to_lng)) = (
        non_empty(params.from_lat),
        non_empty(params.from_lng),
        non_empty(params.to_lat),
        non_empty(params.to_lng),
    ) else {
        return Err(ApiError::InvalidRequest(
            "fromLat, fromLng, toLat, toLng are required".to_string(),
        ));
    };

    debug!(%from_lat, %from_lng, %to_lat, %to_lng, "Computing route");

    let route = routing
        .route(&from_lat, &from_lng, &to_lat, &to_lng)
        .await
        .map_err(|e| {
            error!("OSRM error: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(route))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_rejects_blank_values() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
    }

    #[test]
    fn non_empty_keeps_zero() {
        assert_eq!(non_empty(Some("0".to_string())), Some("0".to_string()));
    }
}
