use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::{error::ApiError, models::SearchResult, Services};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Handle place search (autocomplete).
///
/// Validates the free-text query, forwards it to the geocoding provider,
/// and returns the trimmed candidate list in provider order. Upstream
/// failures are logged and reported with a generic message only.
pub async fn search_places(
    State((geocoder, _)): State<Services>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(ApiError::InvalidRequest("q param required".to_string()));
    }

    debug!(query = %query, "Searching places");

    let results = geocoder.search(&query).await.map_err(|e| {
        error!("Nominatim error: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(results))
}
