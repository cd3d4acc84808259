// Hopper - JSON document batch ingestion service
// Copyright (c) 2025 Hopper Contributors
// Licensed under the MIT License

//! # Hopper - JSON Document Batch Ingestion Service
//!
//! Hopper accepts a batch of JSON documents over a single HTTP request and
//! writes each document into a configured document store: Azure Cosmos DB or
//! MongoDB, selected by a deployment flag.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Parsing** a raw request body into an ordered batch of documents
//! - **Selecting** the storage backend from the `use_mongodb` deployment flag
//! - **Provisioning** the target database and collection (create-if-absent)
//! - **Inserting** the batch with backend-specific atomicity
//! - **Reporting** a per-request insertion tally
//!
//! ## Architecture
//!
//! Hopper follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`api`] - HTTP surface (ingestion endpoint, health probe)
//! - [`core`] - Business logic (parsing, ingestion pipeline, reporting)
//! - [`adapters`] - External integrations (Cosmos DB, MongoDB)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hopper::config::load_config;
//! use hopper::core::ingest::IngestCoordinator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = Arc::new(load_config("hopper.toml")?);
//!
//!     // Create ingestion coordinator
//!     let coordinator = IngestCoordinator::new(config);
//!
//!     // Ingest a batch
//!     let report = coordinator.run(br#"[{"sku": "A-1"}, {"sku": "A-2"}]"#).await?;
//!
//!     println!("{}", report.message());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Backend Selection
//!
//! The `use_mongodb` flag decides the backend once per request: `"true"`
//! selects MongoDB, `"false"` selects Cosmos DB. Everything downstream of
//! the selection sees only the [`adapters::store::DocumentStore`] trait:
//!
//! ```rust
//! use hopper::domain::BackendKind;
//!
//! assert_eq!(BackendKind::from_flag("false").unwrap(), BackendKind::CosmosDb);
//! assert_eq!(BackendKind::from_flag("True").unwrap(), BackendKind::MongoDb);
//! assert!(BackendKind::from_flag("maybe").is_err());
//! ```
//!
//! ### Insertion Semantics
//!
//! The two backends insert with different atomicity, and the report wording
//! reflects that:
//!
//! - **Cosmos DB** inserts documents one at a time. A rejected document is
//!   logged and counted, and the rest of the batch is still attempted, so a
//!   request can end with a partial tally such as `4 / 5 documents inserted`.
//! - **MongoDB** inserts the whole batch in one call. The request either
//!   stores every document or fails as a whole; there is no partial credit.
//!
//! ## Error Handling
//!
//! Hopper uses the [`domain::IngestError`] type for all errors, following
//! Rust best practices:
//!
//! ```rust,no_run
//! use hopper::domain::IngestError;
//!
//! fn example() -> Result<(), IngestError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = hopper::config::load_config("hopper.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! The error variant decides how a failure is surfaced at the HTTP boundary:
//! `Parse` and `Configuration` map to 400, `Connectivity` and `Insert` map
//! to 502.
//!
//! ## Logging
//!
//! Hopper uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting ingestion");
//! warn!(index = 3, "Document skipped");
//! error!(error = "connection refused", "Provisioning failed");
//! ```

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
