use serde::{Deserialize, Serialize};

/// One geocoding candidate, trimmed to the fields the frontend consumes.
///
/// Decoding a provider record through this type is also the trimming step:
/// unknown provider fields are dropped and the five kept fields are required,
/// so a record missing any of them is a malformed payload. `lat` and `lon`
/// stay strings to preserve the provider's precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    #[serde(rename = "type")]
    pub place_type: String,
    /// `[south, north, west, east]`, passed through unmodified.
    pub boundingbox: [String; 4],
}
