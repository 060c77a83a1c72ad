use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use map_navigator_backend::{
    config::Config,
    create_router,
    services::{GeocodingService, RoutingService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "map_navigator_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting map navigator backend");

    let geocoder = Arc::new(GeocodingService::new(&config)?);
    let routing = Arc::new(RoutingService::new(&config)?);

    let app = create_router(&config, geocoder, routing);

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
