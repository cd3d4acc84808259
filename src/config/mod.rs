//! Configuration management for Hopper.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Hopper uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `HOPPER_*` environment overrides applied after parsing
//! - Default values for optional settings
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hopper::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("hopper.toml")?;
//!
//! // Access configuration sections
//! println!("Target: {}/{}", config.store.database, config.store.collection);
//! if let Some(cosmosdb) = &config.cosmosdb {
//!     println!("Cosmos DB endpoint: {}", cosmosdb.endpoint);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ServerConfig`] - HTTP bind address
//! - [`StoreConfig`] - Backend flag and database/collection names
//! - [`CosmosDbConfig`] - Cosmos DB endpoint, key, partition key
//! - [`MongoDbConfig`] - MongoDB connection string
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [server]
//! bind = "0.0.0.0:7071"
//!
//! [store]
//! use_mongodb = "false"
//! database = "inventory"
//! collection = "items"
//!
//! [cosmosdb]
//! endpoint = "https://your-account.documents.azure.com:443/"
//! key = "${HOPPER_COSMOSDB_KEY}"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution, or
//! `HOPPER_<SECTION>_<KEY>` variables to override parsed values:
//!
//! ```bash
//! export HOPPER_COSMOSDB_KEY="secret-key"
//! export HOPPER_STORE_USE_MONGODB="true"
//! ```
//!
//! # Validation
//!
//! Everything backend-independent is validated on load; the backend flag and
//! the `[cosmosdb]`/`[mongodb]` sections are validated when a request selects
//! its backend, so a misdeployed flag rejects requests instead of the
//! process.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, CosmosDbConfig, HopperConfig, LoggingConfig, MongoDbConfig, ServerConfig,
    StoreConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
