//! Error types for scan conversion.

use thiserror::Error;

/// Result type for scan-conversion operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors detected before any pixels are produced.
///
/// Validation happens once at the request boundary; a failed request
/// yields no partial sequence and touches no surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Non-numeric, non-finite or out-of-domain input.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
