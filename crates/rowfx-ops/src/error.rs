//! Error types for row operators.

use thiserror::Error;

/// Error type for row operator invocations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// A buffer contract was violated (missing channel, wrong span).
    #[error(transparent)]
    Buffer(#[from] rowfx_core::Error),

    /// Input sample arrays have inconsistent lengths.
    #[error("length mismatch: {0}")]
    LengthMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for row operator invocations.
pub type OpsResult<T> = Result<T, OpsError>;
