use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use config::Config;
use handlers::{compute_route, health, search_places};
use services::{GeocodingService, RoutingService};

/// Shared handler state: the two provider clients.
pub type Services = (Arc<GeocodingService>, Arc<RoutingService>);

/// Build the application router: the two relay endpoints, the health route,
/// and the static frontend fallback.
///
/// Any path the API routes do not match is served from the frontend bundle,
/// with its entry document as the not-found fallback so client-side routing
/// keeps working on deep links.
pub fn create_router(
    config: &Config,
    geocoder: Arc<GeocodingService>,
    routing: Arc<RoutingService>,
) -> Router {
    let frontend_dir = std::path::Path::new(&config.frontend_dir);
    let frontend =
        ServeDir::new(frontend_dir).fallback(ServeFile::new(frontend_dir.join("index.html")));

    Router::new()
        .route("/", get(health))
        .route("/api", get(health))
        .route("/api/search", get(search_places))
        .route("/api/route", get(compute_route))
        .with_state((geocoder, routing))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
