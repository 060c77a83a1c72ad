pub mod route;
pub mod search;

use axum::{response::IntoResponse, Json};

pub use route::compute_route;
pub use search::search_places;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "ok": true,
        "service": "Map Navigator Backend"
    }))
}
