//! Domain models and types for Hopper.
//!
//! This module contains the core domain types and business rules shared by
//! every stage of an ingestion request.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Opaque documents** ([`Document`], [`Batch`]) — caller content, object
//!   shape enforced, nothing else inspected
//! - **Backend selection** ([`BackendKind`]) — which store handles a request,
//!   decided once from the deployment flag
//! - **Store namespace** ([`StoreTarget`]) — the database/collection pair
//! - **Error taxonomy** ([`IngestError`]) and the [`Result`] alias
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use hopper::domain::{BackendKind, Result};
//!
//! fn example(flag: &str) -> Result<BackendKind> {
//!     // Errors are propagated with the ? operator
//!     let backend = BackendKind::from_flag(flag)?;
//!     Ok(backend)
//! }
//! ```

pub mod document;
pub mod errors;
pub mod result;
pub mod target;

// Re-export commonly used types for convenience
pub use document::{Batch, Document};
pub use errors::IngestError;
pub use result::Result;
pub use target::{BackendKind, StoreTarget};
