//! Azure Cosmos DB integration
//!
//! This module provides integration with Azure Cosmos DB for storing
//! JSON documents with per-document failure isolation.

pub mod client;
pub mod store;

pub use client::CosmosDbClient;
pub use store::CosmosStore;
