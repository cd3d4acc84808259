//! Ingestion result reporting
//!
//! This module defines the report produced for a completed ingestion
//! request: which backend handled it, where the batch landed, and the
//! insertion tally.

use crate::adapters::store::InsertionSummary;
use crate::domain::{BackendKind, StoreTarget};

/// Report for a completed ingestion request
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Which backend handled the request
    pub backend: BackendKind,

    /// Database and collection the batch landed in
    pub target: StoreTarget,

    /// Insertion tally
    pub summary: InsertionSummary,
}

impl IngestReport {
    /// Create a new report
    pub fn new(backend: BackendKind, target: StoreTarget, summary: InsertionSummary) -> Self {
        Self {
            backend,
            target,
            summary,
        }
    }

    /// Human-readable outcome line
    ///
    /// The wording differs by backend because the insertion semantics do:
    /// a MongoDB batch is all-or-nothing, so a report only exists when the
    /// whole batch was stored, while a Cosmos DB batch can land partially
    /// and reports its tally.
    pub fn message(&self) -> String {
        match self.backend {
            BackendKind::CosmosDb => format!(
                "{} / {} documents inserted in {}: {}",
                self.summary.inserted, self.summary.total, self.backend, self.target
            ),
            BackendKind::MongoDb => format!(
                "{} documents inserted successfully in {}: {}",
                self.summary.total, self.backend, self.target
            ),
        }
    }

    /// Log the report
    pub fn log(&self) {
        tracing::info!(
            backend = %self.backend,
            target = %self.target,
            total = self.summary.total,
            inserted = self.summary.inserted,
            "{}",
            self.message()
        );
    }
}
