//! Cosmos DB client implementation
//!
//! This module provides the client for interacting with Azure Cosmos DB.

use crate::config::CosmosDbConfig;
use crate::domain::{BackendKind, IngestError, Result, StoreTarget};
use azure_core::credentials::Secret;
use azure_data_cosmos::clients::{ContainerClient, DatabaseClient};
use azure_data_cosmos::models::{ContainerProperties, IndexingPolicy, PartitionKeyDefinition};
use azure_data_cosmos::{CosmosClient, CosmosClientOptions};
use std::borrow::Cow;

/// Cosmos DB client for Hopper
///
/// Provides methods for connecting to Azure Cosmos DB and for ensuring the
/// target database and container exist before documents are written.
pub struct CosmosDbClient {
    /// Cosmos DB client
    client: CosmosClient,

    /// Database client bound to the target database
    database: DatabaseClient,

    /// Configuration
    config: CosmosDbConfig,

    /// Database and container the client writes to
    target: StoreTarget,
}

impl CosmosDbClient {
    /// Create a new Cosmos DB client bound to a target
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn connect(config: CosmosDbConfig, target: StoreTarget) -> Result<Self> {
        use secrecy::ExposeSecret;

        // Convert our SecretString to Azure's Secret type
        let key_str: String = config.key.expose_secret().clone().into();
        let key = Secret::new(key_str);
        let options = Some(CosmosClientOptions::default());

        let client = CosmosClient::with_key(&config.endpoint, key, options).map_err(|e| {
            IngestError::connectivity(
                BackendKind::CosmosDb,
                format!("Failed to create Cosmos client: {e}"),
            )
        })?;

        let database = client.database_client(&target.database);

        Ok(Self {
            client,
            database,
            config,
            target,
        })
    }

    /// Ensure the database exists, creating it if necessary
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub async fn ensure_database_exists(&self) -> Result<()> {
        // Try to read the database first
        match self.database.read(None).await {
            Ok(_) => {
                tracing::debug!(database = %self.target.database, "Database already exists");
                Ok(())
            }
            Err(_) => {
                // Database doesn't exist, create it
                tracing::info!(database = %self.target.database, "Creating database");

                self.client
                    .create_database(&self.target.database, None)
                    .await
                    .map_err(|e| {
                        IngestError::connectivity(
                            BackendKind::CosmosDb,
                            format!("Failed to create database {}: {e}", self.target.database),
                        )
                    })?;

                tracing::info!(database = %self.target.database, "Database created successfully");
                Ok(())
            }
        }
    }

    /// Ensure the target container exists, creating it if necessary
    ///
    /// Created containers are partitioned by the configured partition key path.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be created.
    pub async fn ensure_container_exists(&self) -> Result<()> {
        let container_name = &self.target.collection;
        let container = self.database.container_client(container_name);

        // Try to read the container first
        match container.read(None).await {
            Ok(_) => {
                tracing::debug!(container = %container_name, "Container already exists");
                Ok(())
            }
            Err(_) => {
                // Container doesn't exist, create it
                tracing::info!(container = %container_name, "Creating container");

                let partition_key_def = PartitionKeyDefinition {
                    paths: vec![self.config.partition_key.clone()],
                    kind: azure_data_cosmos::models::PartitionKeyKind::Hash,
                    version: None,
                };

                let properties = ContainerProperties {
                    id: Cow::Owned(container_name.clone()),
                    partition_key: partition_key_def,
                    indexing_policy: Some(IndexingPolicy::default()),
                    ..Default::default()
                };

                self.database
                    .create_container(properties, None)
                    .await
                    .map_err(|e| {
                        IngestError::connectivity(
                            BackendKind::CosmosDb,
                            format!("Failed to create container {container_name}: {e}"),
                        )
                    })?;

                tracing::info!(container = %container_name, "Container created successfully");
                Ok(())
            }
        }
    }

    /// Get a client for the target container
    pub fn container_client(&self) -> ContainerClient {
        self.database.container_client(&self.target.collection)
    }

    /// The document member created containers are partitioned by
    pub fn partition_field(&self) -> &str {
        self.config.partition_field()
    }
}
