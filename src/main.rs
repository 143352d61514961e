//! DSA Tracker - Application Entry Point
//!
//! This is the main entry point for the catalogue server.

use std::net::SocketAddr;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dsatrack::{config::Config, handlers, middleware::logging_middleware, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(config.server.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.server.json_logs).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting DSA Tracker server...");

    // Load the catalogue once; it is read-only from here on
    let state = AppState::load(config.clone())?;
    tracing::info!(
        problems = state.catalogue().len(),
        categories = state.catalogue().categories().len(),
        default_language = %config.catalogue.default_language,
        "Catalogue ready"
    );

    // Build the router
    let app = Router::new()
        .merge(handlers::routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
