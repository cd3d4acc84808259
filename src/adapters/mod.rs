//! External system integrations for Hopper.
//!
//! This module provides adapters for the storage backends documents can
//! be ingested into:
//!
//! - [`store`] - Document store abstraction layer (trait-based)
//! - [`cosmosdb`] - Azure Cosmos DB implementation
//! - [`mongodb`] - MongoDB implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with scripted implementations. The store layer uses
//! trait-based abstraction so the ingestion pipeline never depends on a
//! concrete backend.
//!
//! # Store Abstraction
//!
//! A store is selected from configuration and provisions the target before
//! handing out a sink:
//!
//! ```rust,no_run
//! use hopper::adapters::store::create_document_store;
//! use hopper::config::load_config;
//! use hopper::domain::StoreTarget;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("hopper.toml")?;
//! let store = create_document_store(&config)?;
//!
//! let target = StoreTarget::new("inventory", "items")?;
//! let sink = store.provision(&target).await?;
//! // Use the sink to insert document batches
//! # Ok(())
//! # }
//! ```

pub mod cosmosdb;
pub mod mongodb;
pub mod store;
