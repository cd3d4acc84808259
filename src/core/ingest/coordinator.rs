//! Ingestion coordinator - main orchestrator for the ingestion pipeline
//!
//! This module coordinates an ingestion request end to end: backend
//! selection, batch parsing, target provisioning, insertion, and
//! reporting.

use crate::adapters::store::{create_document_store, DocumentStore};
use crate::config::HopperConfig;
use crate::core::ingest::report::IngestReport;
use crate::core::parse::parse_batch;
use crate::domain::{Result, StoreTarget};
use std::sync::Arc;

/// Ingestion coordinator
///
/// One coordinator serves all requests; each call to [`run`](Self::run)
/// handles a single batch independently, with its own backend connection.
pub struct IngestCoordinator {
    config: Arc<HopperConfig>,
}

impl IngestCoordinator {
    /// Create a new ingestion coordinator
    pub fn new(config: Arc<HopperConfig>) -> Self {
        Self { config }
    }

    /// Ingest one raw request body
    ///
    /// The backend is selected before the body is touched, so a broken
    /// `use_mongodb` flag is reported even for a body that would not
    /// parse.
    ///
    /// # Errors
    ///
    /// Returns an error if backend selection, parsing, provisioning, or
    /// a whole-batch insert fails. Per-document Cosmos DB failures are
    /// reflected in the report tally instead.
    pub async fn run(&self, raw: &[u8]) -> Result<IngestReport> {
        let store = create_document_store(&self.config)?;
        self.run_with_store(store.as_ref(), raw).await
    }

    /// Ingest one raw request body into an already selected store
    pub async fn run_with_store(
        &self,
        store: &dyn DocumentStore,
        raw: &[u8],
    ) -> Result<IngestReport> {
        let batch = parse_batch(raw)?;
        let target = StoreTarget::new(
            self.config.store.database.clone(),
            self.config.store.collection.clone(),
        )?;

        tracing::info!(
            backend = %store.kind(),
            target = %target,
            count = batch.len(),
            "Ingesting document batch"
        );

        let sink = store.provision(&target).await?;
        let summary = sink.insert_batch(batch).await?;

        let report = IngestReport::new(store.kind(), target, summary);
        report.log();

        Ok(report)
    }
}
