//! Error types for host-side scheduling and registry lookup.

use thiserror::Error;

/// Error type for registry, sourcing, and render driver operations.
#[derive(Error, Debug)]
pub enum HostError {
    /// No operator with the given name is registered.
    #[error("operator '{0}' not registered")]
    OpNotFound(String),

    /// The operator's input arity cannot be satisfied by the driver.
    #[error("operator '{name}' takes {min}..={max} inputs, driver supplies {got}")]
    ArityMismatch {
        /// Operator name.
        name: String,
        /// Minimum inputs the operator accepts.
        min: usize,
        /// Maximum inputs the operator accepts.
        max: usize,
        /// Inputs the driver supplies.
        got: usize,
    },

    /// A buffer or bounds contract was violated.
    #[error(transparent)]
    Buffer(#[from] rowfx_core::Error),

    /// An operator engine failed.
    #[error(transparent)]
    Op(#[from] rowfx_ops::OpsError),
}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;
