//! Domain error types
//!
//! This module defines the error taxonomy for Hopper. Every fatal outcome a
//! request can have is one of these variants, and the HTTP boundary maps the
//! variant (never the message) to a status code. Errors don't expose
//! third-party SDK types.

use thiserror::Error;

use crate::domain::target::BackendKind;

/// Main Hopper error type
///
/// The variant decides how a failure is surfaced: `Parse` and `Configuration`
/// are request-rejection errors, `Connectivity` and `Insert` are fatal
/// backend errors. Individual document failures on the per-document insert
/// path are logged and counted, not represented here.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Request body was malformed or not an array of JSON objects
    #[error("Problem with JSON input: {0}")]
    Parse(String),

    /// Deployment configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The selected backend could not be reached or provisioned
    #[error("Problem communicating with {backend}: {cause}")]
    Connectivity {
        /// Backend that was being contacted
        backend: BackendKind,
        /// Underlying driver/SDK failure
        cause: String,
    },

    /// A whole-batch insert was rejected by the backend
    #[error("Problem inserting documents into {backend}: {cause}")]
    Insert {
        /// Backend that rejected the batch
        backend: BackendKind,
        /// Underlying driver/SDK failure
        cause: String,
    },

    /// I/O errors (file ingestion, config reads)
    #[error("I/O error: {0}")]
    Io(String),
}

impl IngestError {
    /// Builds a connectivity error for `backend`
    pub fn connectivity(backend: BackendKind, cause: impl Into<String>) -> Self {
        IngestError::Connectivity {
            backend,
            cause: cause.into(),
        }
    }

    /// Builds an insert error for `backend`
    pub fn insert(backend: BackendKind, cause: impl Into<String>) -> Self {
        IngestError::Insert {
            backend,
            cause: cause.into(),
        }
    }

    /// True when the caller (not the deployment or the backend) is at fault
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            IngestError::Parse(_) | IngestError::Configuration(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for IngestError {
    fn from(err: toml::de::Error) -> Self {
        IngestError::Configuration(format!("TOML parse error: {err}"))
    }
}
