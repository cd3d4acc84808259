//! Cosmos DB document store
//!
//! Documents are inserted one at a time so that a document the service
//! rejects does not abort the rest of the batch. Each failed document is
//! logged with its position and content, then skipped.

use crate::adapters::cosmosdb::client::CosmosDbClient;
use crate::adapters::store::traits::{DocumentSink, DocumentStore, InsertionSummary};
use crate::config::CosmosDbConfig;
use crate::domain::{BackendKind, Batch, Document, IngestError, Result, StoreTarget};
use async_trait::async_trait;
use azure_data_cosmos::clients::ContainerClient;
use azure_data_cosmos::PartitionKey;
use futures::future::BoxFuture;

/// Cosmos DB store
///
/// Holds the configuration needed to reach the account. Connections are
/// established when a target is provisioned.
#[derive(Debug)]
pub struct CosmosStore {
    config: CosmosDbConfig,
}

impl CosmosStore {
    /// Create a new Cosmos DB store
    pub fn new(config: CosmosDbConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DocumentStore for CosmosStore {
    fn kind(&self) -> BackendKind {
        BackendKind::CosmosDb
    }

    async fn provision(&self, target: &StoreTarget) -> Result<Box<dyn DocumentSink>> {
        let client = CosmosDbClient::connect(self.config.clone(), target.clone())?;
        client.ensure_database_exists().await?;
        client.ensure_container_exists().await?;

        Ok(Box::new(CosmosSink {
            partition_field: client.partition_field().to_string(),
            container: client.container_client(),
        }))
    }
}

/// Sink bound to a provisioned Cosmos DB container
struct CosmosSink {
    container: ContainerClient,
    partition_field: String,
}

impl CosmosSink {
    async fn insert_one(&self, document: &Document) -> Result<()> {
        let partition_value = document
            .string_field(&self.partition_field)
            .ok_or_else(|| {
                IngestError::insert(
                    BackendKind::CosmosDb,
                    format!(
                        "document has no string value at '{}' to partition by",
                        self.partition_field
                    ),
                )
            })?
            .to_string();

        self.container
            .create_item(PartitionKey::from(partition_value), document.clone(), None)
            .await
            .map_err(|e| IngestError::insert(BackendKind::CosmosDb, e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl DocumentSink for CosmosSink {
    async fn insert_batch(&self, mut batch: Batch) -> Result<InsertionSummary> {
        // Cosmos DB requires every document to carry a string "id"
        for document in &mut batch {
            document.ensure_id();
        }

        Ok(insert_each(&batch, |document| Box::pin(self.insert_one(document))).await)
    }
}

/// Insert documents one at a time, isolating failures
///
/// Attempts follow batch order. A failed document is logged with its
/// position in the batch and its serialized content, then skipped; the
/// remaining documents are still attempted.
async fn insert_each<'a, F>(documents: &'a [Document], insert_one: F) -> InsertionSummary
where
    F: Fn(&'a Document) -> BoxFuture<'a, Result<()>>,
{
    let mut inserted = 0;

    for (index, document) in documents.iter().enumerate() {
        match insert_one(document).await {
            Ok(()) => inserted += 1,
            Err(error) => {
                tracing::error!(
                    index,
                    document = %document,
                    error = %error,
                    "Problem inserting document"
                );
            }
        }
    }

    InsertionSummary::new(documents.len(), inserted)
}
