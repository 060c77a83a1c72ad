use serde::{Deserialize, Serialize};

/// GeoJSON LineString geometry, passed through from the routing provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineString {
    #[serde(rename = "type")]
    pub geometry_type: String,
    /// Ordered `[lon, lat]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

/// A computed driving route: total length in meters, estimated travel time
/// in seconds, and the path geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResult {
    pub distance: f64,
    pub duration: f64,
    pub geometry: LineString,
}

impl RouteResult {
    /// A decoded route must have non-negative cost fields and at least two
    /// points of geometry.
    pub fn is_valid(&self) -> bool {
        self.distance >= 0.0 && self.duration >= 0.0 && self.geometry.coordinates.len() >= 2
    }
}
