//! Document store factory
//!
//! This module provides the factory function that selects a storage backend
//! based on configuration.
//!
//! Selection happens per request: the `use_mongodb` flag and the selected
//! backend section are resolved and validated here rather than at config
//! load time, so a broken flag value is reported to the caller of the
//! request that hit it instead of preventing startup.

use crate::adapters::cosmosdb::CosmosStore;
use crate::adapters::mongodb::MongoStore;
use crate::adapters::store::traits::DocumentStore;
use crate::config::HopperConfig;
use crate::domain::{BackendKind, IngestError, Result};
use std::sync::Arc;

/// Create a document store based on the configuration
///
/// Examines the `use_mongodb` flag and constructs the matching store from
/// its backend section. The store holds configuration only; connections
/// are established when the store provisions a target.
///
/// # Errors
///
/// Returns a configuration error if the flag is not a valid boolean, the
/// selected backend section is missing, or the section fails validation.
pub fn create_document_store(config: &HopperConfig) -> Result<Arc<dyn DocumentStore>> {
    let kind = BackendKind::from_flag(&config.store.use_mongodb)?;

    match kind {
        BackendKind::CosmosDb => {
            let cosmos_config = config.cosmosdb.as_ref().ok_or_else(|| {
                IngestError::Configuration(
                    "cosmosdb configuration is required when use_mongodb = \"false\"".to_string(),
                )
            })?;
            cosmos_config.validate().map_err(IngestError::Configuration)?;

            tracing::debug!("Creating CosmosDB store");
            Ok(Arc::new(CosmosStore::new(cosmos_config.clone())) as Arc<dyn DocumentStore>)
        }
        BackendKind::MongoDb => {
            let mongo_config = config.mongodb.as_ref().ok_or_else(|| {
                IngestError::Configuration(
                    "mongodb configuration is required when use_mongodb = \"true\"".to_string(),
                )
            })?;
            mongo_config.validate().map_err(IngestError::Configuration)?;

            tracing::debug!("Creating MongoDB store");
            Ok(Arc::new(MongoStore::new(mongo_config.clone())) as Arc<dyn DocumentStore>)
        }
    }
}
