//! Core ingestion logic for Hopper.
//!
//! This module contains the pipeline that turns a raw request body into
//! stored documents.
//!
//! # Modules
//!
//! - [`parse`] - JSON batch parsing
//! - [`ingest`] - Ingestion orchestration and reporting
//!
//! # Ingestion Workflow
//!
//! The typical ingestion workflow:
//!
//! 1. **Select**: Resolve the `use_mongodb` flag to a storage backend
//! 2. **Parse**: Decode the request body into an ordered document batch
//! 3. **Provision**: Ensure the target database and collection exist
//! 4. **Insert**: Write the batch with the backend's insertion strategy
//! 5. **Report**: Tally the outcome and log it
//!
//! # Example
//!
//! ```rust,no_run
//! use hopper::config::load_config;
//! use hopper::core::ingest::IngestCoordinator;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = Arc::new(load_config("hopper.toml")?);
//!
//! // Create ingestion coordinator
//! let coordinator = IngestCoordinator::new(config);
//!
//! // Ingest a batch
//! let report = coordinator.run(br#"[{"sku": "A-1"}]"#).await?;
//!
//! println!("{}", report.message());
//! # Ok(())
//! # }
//! ```

pub mod ingest;
pub mod parse;
