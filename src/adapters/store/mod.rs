//! Document store abstraction layer
//!
//! This module provides a trait-based abstraction for document storage,
//! allowing Hopper to write batches to different backends (Cosmos DB, MongoDB).

pub mod factory;
pub mod traits;

pub use factory::create_document_store;
pub use traits::{DocumentSink, DocumentStore, InsertionSummary};
