//! HTTP API layer for Hopper.
//!
//! # Endpoints
//!
//! - `POST /api/v1/documents` - Ingest a JSON array of documents
//! - `GET /api/v1/health` - Health check
//!
//! The ingestion endpoint accepts the raw request body and responds with
//! a plain-text outcome line: the insertion report on success, or the
//! error message with a status that distinguishes caller problems (400)
//! from backend problems (502).

pub mod handlers;
pub mod server;

pub use handlers::{health_check, ingest_documents};
pub use server::{create_app, start_server};
