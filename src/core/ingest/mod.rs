//! Ingestion orchestration and reporting

pub mod coordinator;
pub mod report;

pub use coordinator::IngestCoordinator;
pub use report::IngestReport;
