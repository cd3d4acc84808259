//! Result type alias for Hopper
//!
//! This module provides a convenient Result type alias that uses IngestError
//! as the error type.

use super::errors::IngestError;

/// Result type alias for Hopper operations
///
/// This is a convenience type alias that uses `IngestError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use hopper::domain::result::Result;
/// use hopper::domain::errors::IngestError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(IngestError::Configuration("missing flag".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, IngestError>;
