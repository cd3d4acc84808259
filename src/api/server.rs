//! HTTP server implementation for the Hopper API

use crate::config::HopperConfig;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers;

/// Creates the application router with all routes and middleware
pub fn create_app(config: Arc<HopperConfig>) -> Router {
    Router::new()
        // Ingestion route
        .route("/api/v1/documents", post(handlers::ingest_documents))
        // System routes
        .route("/api/v1/health", get(handlers::health_check))
        // Batch size is bounded by what the backend accepts, not by the server
        .layer(DefaultBodyLimit::disable())
        // Apply middleware
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        // Add configuration as shared state
        .with_state(config)
}

/// Start the HTTP server
///
/// Runs until the shutdown future resolves; in-flight requests are
/// allowed to complete before the server exits.
pub async fn start_server(
    addr: SocketAddr,
    config: Arc<HopperConfig>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = create_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!(
        "Ingestion endpoint available at http://{}/api/v1/documents",
        addr
    );
    tracing::info!("Health check available at http://{}/api/v1/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
