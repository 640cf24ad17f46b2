// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::trend_service::TrendService;
use crate::infrastructure::config::{load_channels_config, load_server_config};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    apply_gesture, get_series, get_view, health_check, reset_data, upload_csv,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let channels_config = load_channels_config()?;

    // Create service (application layer)
    let trend_service = TrendService::new();

    // Create application state
    let state = Arc::new(AppState {
        trend_service,
        channels_config,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/trends/data", post(upload_csv).delete(reset_data))
        .route("/trends/gestures", post(apply_gesture))
        .route("/trends/view", get(get_view))
        .route("/trends/series", get(get_series))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = server_config.server.bind.parse()?;
    println!("Starting boiler-trends service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
