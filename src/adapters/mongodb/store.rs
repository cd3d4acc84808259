//! MongoDB document store
//!
//! Documents are inserted with a single batch call: either the whole batch
//! is stored or the request fails.

use crate::adapters::mongodb::client::MongoDbClient;
use crate::adapters::store::traits::{DocumentSink, DocumentStore, InsertionSummary};
use crate::config::MongoDbConfig;
use crate::domain::{BackendKind, Batch, IngestError, Result, StoreTarget};
use async_trait::async_trait;
use mongodb::bson;
use mongodb::Collection;

/// MongoDB store
///
/// Holds the configuration needed to reach the deployment. Connections are
/// established when a target is provisioned.
#[derive(Debug)]
pub struct MongoStore {
    config: MongoDbConfig,
}

impl MongoStore {
    /// Create a new MongoDB store
    pub fn new(config: MongoDbConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn kind(&self) -> BackendKind {
        BackendKind::MongoDb
    }

    async fn provision(&self, target: &StoreTarget) -> Result<Box<dyn DocumentSink>> {
        let client = MongoDbClient::connect(&self.config, target.clone()).await?;
        client.ensure_collection_exists().await?;

        Ok(Box::new(MongoSink {
            collection: client.collection(),
        }))
    }
}

/// Sink bound to a provisioned MongoDB collection
struct MongoSink {
    collection: Collection<bson::Document>,
}

#[async_trait]
impl DocumentSink for MongoSink {
    async fn insert_batch(&self, batch: Batch) -> Result<InsertionSummary> {
        let total = batch.len();

        // The driver rejects an empty insert_many; an empty batch is a
        // successful no-op instead
        if batch.is_empty() {
            return Ok(InsertionSummary::complete(0));
        }

        let documents = batch
            .iter()
            .map(bson::to_document)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                IngestError::insert(
                    BackendKind::MongoDb,
                    format!("Failed to convert document to BSON: {e}"),
                )
            })?;

        self.collection
            .insert_many(documents, None)
            .await
            .map_err(|e| IngestError::insert(BackendKind::MongoDb, e.to_string()))?;

        Ok(InsertionSummary::complete(total))
    }
}
