//! Request body parsing
//!
//! Turns a raw request body into a [`Batch`]. The parser is the same for
//! both backends and touches neither configuration nor the network.

use crate::domain::errors::IngestError;
use crate::domain::result::Result;
use crate::domain::Batch;

/// Parses a raw request body into an ordered batch of documents
///
/// The body must be a top-level JSON array whose elements are objects; any
/// other shape (malformed syntax, a scalar, a top-level object, a non-object
/// element) fails with the deserializer's position-annotated cause. An empty
/// array is valid and yields an empty batch. Source order is preserved.
///
/// # Examples
///
/// ```
/// use hopper::core::parse::parse_batch;
///
/// let batch = parse_batch(br#"[{"sku": "a-1"}, {"sku": "a-2"}]"#).unwrap();
/// assert_eq!(batch.len(), 2);
///
/// assert!(parse_batch(b"{\"not\": \"an array\"}").is_err());
/// ```
pub fn parse_batch(raw: &[u8]) -> Result<Batch> {
    serde_json::from_slice(raw).map_err(|e| IngestError::Parse(e.to_string()))
}
