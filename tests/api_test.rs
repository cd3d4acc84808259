//! Integration tests for the HTTP API
//!
//! The router is driven in memory with tower's `oneshot`, so these tests
//! exercise the full boundary mapping without binding a socket. The 502
//! path uses a MongoDB connection string pointing at a closed port with a
//! short server-selection timeout.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hopper::api::create_app;
use hopper::config::{
    secret_string, ApplicationConfig, CosmosDbConfig, HopperConfig, LoggingConfig, MongoDbConfig,
    ServerConfig, StoreConfig,
};
use std::sync::Arc;
use tower::util::ServiceExt;

fn config(use_mongodb: &str) -> Arc<HopperConfig> {
    Arc::new(HopperConfig {
        application: ApplicationConfig::default(),
        server: ServerConfig::default(),
        store: StoreConfig {
            use_mongodb: use_mongodb.to_string(),
            database: "inventory".to_string(),
            collection: "items".to_string(),
        },
        cosmosdb: Some(CosmosDbConfig {
            endpoint: "https://test.documents.azure.com:443/".to_string(),
            key: secret_string("test-key".to_string()),
            partition_key: "/id".to_string(),
        }),
        // Closed port and a short timeout: provisioning fails fast
        mongodb: Some(MongoDbConfig {
            connection_string: secret_string(
                "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=250&connectTimeoutMS=250"
                    .to_string(),
            ),
        }),
        logging: LoggingConfig::default(),
    })
}

fn ingest_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/documents")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_app(config("false"));

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "hopper");
}

#[tokio::test]
async fn test_malformed_body_returns_bad_request() {
    let app = create_app(config("false"));

    let response = app
        .oneshot(ingest_request("this is not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.starts_with("Problem with JSON input:"));
}

#[tokio::test]
async fn test_non_array_body_returns_bad_request() {
    let app = create_app(config("false"));

    let response = app
        .oneshot(ingest_request(r#"{"a": 1}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.starts_with("Problem with JSON input:"));
}

#[tokio::test]
async fn test_invalid_flag_returns_bad_request() {
    let app = create_app(config("maybe"));

    // The body is irrelevant: selection fails first
    let response = app
        .oneshot(ingest_request("this is not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("use_mongodb"));
}

#[tokio::test]
async fn test_missing_backend_section_returns_bad_request() {
    let mut config = (*config("true")).clone();
    config.mongodb = None;
    let app = create_app(Arc::new(config));

    let response = app.oneshot(ingest_request("[]")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("mongodb configuration is required"));
}

#[tokio::test]
async fn test_unreachable_backend_returns_bad_gateway() {
    let app = create_app(config("true"));

    let response = app
        .oneshot(ingest_request(r#"[{"sku": "a-1"}]"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_string(response).await;
    assert!(body.starts_with("Problem communicating with MongoDB"));
}

#[tokio::test]
async fn test_large_body_is_not_rejected_by_size() {
    // The default axum body limit (2 MB) is disabled; a batch larger than
    // that must reach the pipeline. The misconfigured flag turns it into a
    // 400 without touching a backend, which is enough to prove the body
    // made it past the extractor.
    let app = create_app(config("maybe"));

    let document = format!(r#"{{"payload": "{}"}}"#, "x".repeat(1024));
    let documents: Vec<&str> = std::iter::repeat(document.as_str()).take(3 * 1024).collect();
    let body = format!("[{}]", documents.join(","));
    assert!(body.len() > 2 * 1024 * 1024);

    let response = app.oneshot(ingest_request(body)).await.unwrap();

    assert_ne!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_app(config("false"));

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/documents")
        .body(Body::empty())
        .unwrap();

    // The ingestion route only accepts POST
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
