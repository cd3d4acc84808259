//! Document store abstraction traits
//!
//! This module defines the traits that storage backends must implement
//! to receive document batches from Hopper.

use crate::domain::{Batch, BackendKind, Result, StoreTarget};
use async_trait::async_trait;

/// Outcome of a batch insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionSummary {
    /// Number of documents in the batch
    pub total: usize,

    /// Number of documents successfully inserted
    pub inserted: usize,
}

impl InsertionSummary {
    /// Create a summary for a batch where some documents may have failed
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `inserted` exceeds `total`.
    pub fn new(total: usize, inserted: usize) -> Self {
        debug_assert!(inserted <= total, "inserted count cannot exceed batch size");
        Self { total, inserted }
    }

    /// Create a summary for a batch where every document was inserted
    pub fn complete(total: usize) -> Self {
        Self {
            total,
            inserted: total,
        }
    }

    /// Number of documents that failed to insert
    pub fn failed(&self) -> usize {
        self.total - self.inserted
    }

    /// Whether every document in the batch was inserted
    pub fn is_complete(&self) -> bool {
        self.inserted == self.total
    }
}

/// Storage backend capable of provisioning a destination for documents
///
/// A store knows how to reach its backing service and how to create the
/// database and collection a batch targets. Provisioning is the only way
/// to obtain a [`DocumentSink`], so documents can never be written to a
/// destination that has not been verified to exist.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Which backend this store writes to
    fn kind(&self) -> BackendKind;

    /// Ensure the target database and collection exist, creating them if necessary
    ///
    /// Returns a sink bound to the provisioned collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or the database
    /// or collection cannot be created.
    async fn provision(&self, target: &StoreTarget) -> Result<Box<dyn DocumentSink>>;
}

/// Destination for a batch of documents
///
/// A sink is always bound to a collection that exists. Implementations
/// decide the insertion strategy: per-document writes that isolate
/// failures, or a single batch write that succeeds or fails as a whole.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Insert a batch of documents into the bound collection
    ///
    /// # Errors
    ///
    /// Returns an error only when the batch as a whole cannot be
    /// processed. Per-document failures are reflected in the returned
    /// [`InsertionSummary`] instead.
    async fn insert_batch(&self, batch: Batch) -> Result<InsertionSummary>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_complete() {
        let summary = InsertionSummary::complete(5);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.inserted, 5);
        assert_eq!(summary.failed(), 0);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_summary_partial() {
        let summary = InsertionSummary::new(5, 3);
        assert_eq!(summary.failed(), 2);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_summary_empty_batch() {
        let summary = InsertionSummary::complete(0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.inserted, 0);
        assert!(summary.is_complete());
    }
}
