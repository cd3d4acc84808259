//! HTTP request handlers for the Hopper API

use crate::config::HopperConfig;
use crate::core::ingest::IngestCoordinator;
use crate::domain::IngestError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use std::sync::Arc;

/// Health check response payload
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Handle `POST /api/v1/documents`
///
/// The body is taken raw instead of through a JSON extractor so that
/// parse failures produce the ingestion pipeline's own error wording.
pub async fn ingest_documents(
    State(config): State<Arc<HopperConfig>>,
    body: Bytes,
) -> (StatusCode, String) {
    let coordinator = IngestCoordinator::new(config);

    match coordinator.run(&body).await {
        Ok(report) => (StatusCode::OK, report.message()),
        Err(error) => {
            tracing::error!(error = %error, "Ingestion request failed");
            (status_for(&error), error.to_string())
        }
    }
}

/// Map an ingestion error to a response status
///
/// Problems the caller can fix (bad body, bad deployment flag) map to
/// 400; backend problems map to 502; local I/O problems map to 500.
fn status_for(error: &IngestError) -> StatusCode {
    match error {
        IngestError::Parse(_) | IngestError::Configuration(_) => StatusCode::BAD_REQUEST,
        IngestError::Connectivity { .. } | IngestError::Insert { .. } => StatusCode::BAD_GATEWAY,
        IngestError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle `GET /api/v1/health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "hopper".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
