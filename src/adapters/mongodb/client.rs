//! MongoDB client implementation
//!
//! This module provides the client for interacting with MongoDB.

use crate::config::MongoDbConfig;
use crate::domain::{BackendKind, IngestError, Result, StoreTarget};
use mongodb::bson::{self, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

/// MongoDB client for Hopper
///
/// Provides methods for connecting to a MongoDB deployment and for ensuring
/// the target collection exists before documents are written. The target
/// database springs into existence with its first collection.
pub struct MongoDbClient {
    /// Database handle bound to the target database
    database: Database,

    /// Database and collection the client writes to
    target: StoreTarget,
}

impl MongoDbClient {
    /// Connect to MongoDB and verify the deployment is reachable
    ///
    /// The driver connects lazily, so a ping is issued here to surface
    /// connectivity problems before any write is attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string cannot be parsed or the
    /// deployment does not respond.
    pub async fn connect(config: &MongoDbConfig, target: StoreTarget) -> Result<Self> {
        use secrecy::ExposeSecret;

        let options = ClientOptions::parse(config.connection_string.expose_secret().as_ref())
            .await
            .map_err(|e| {
                IngestError::connectivity(
                    BackendKind::MongoDb,
                    format!("Failed to parse connection string: {e}"),
                )
            })?;

        let client = Client::with_options(options).map_err(|e| {
            IngestError::connectivity(
                BackendKind::MongoDb,
                format!("Failed to create MongoDB client: {e}"),
            )
        })?;

        client
            .database("admin")
            .run_command(doc! {"ping": 1}, None)
            .await
            .map_err(|e| {
                IngestError::connectivity(
                    BackendKind::MongoDb,
                    format!("Connection test failed: {e}"),
                )
            })?;

        let database = client.database(&target.database);

        Ok(Self { database, target })
    }

    /// Ensure the target collection exists, creating it if necessary
    ///
    /// # Errors
    ///
    /// Returns an error if the collection listing or creation fails.
    pub async fn ensure_collection_exists(&self) -> Result<()> {
        let names = self
            .database
            .list_collection_names(None)
            .await
            .map_err(|e| {
                IngestError::connectivity(
                    BackendKind::MongoDb,
                    format!("Failed to list collections: {e}"),
                )
            })?;

        if names.iter().any(|name| name == &self.target.collection) {
            tracing::debug!(collection = %self.target.collection, "Collection already exists");
            return Ok(());
        }

        tracing::info!(collection = %self.target.collection, "Creating collection");

        match self
            .database
            .create_collection(&self.target.collection, None)
            .await
        {
            Ok(()) => {
                tracing::info!(collection = %self.target.collection, "Collection created successfully");
                Ok(())
            }
            // NamespaceExists: another writer created the collection between
            // the listing and the create call
            Err(e) if is_namespace_exists(&e) => Ok(()),
            Err(e) => Err(IngestError::connectivity(
                BackendKind::MongoDb,
                format!("Failed to create collection {}: {e}", self.target.collection),
            )),
        }
    }

    /// Get a handle to the target collection
    pub fn collection(&self) -> Collection<bson::Document> {
        self.database.collection(&self.target.collection)
    }
}

fn is_namespace_exists(error: &mongodb::error::Error) -> bool {
    matches!(
        &*error.kind,
        mongodb::error::ErrorKind::Command(command_error) if command_error.code == 48
    )
}
