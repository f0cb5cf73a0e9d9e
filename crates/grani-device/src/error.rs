//! Error types for the device crate.

use thiserror::Error;

use grani_circuit::CircuitError;

/// Errors that can occur during device execution and statistics.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeviceError {
    /// Operation not supported by the device.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Observable not supported by the device.
    #[error("Unsupported observable: {0}")]
    UnsupportedObservable(String),

    /// A required method was not overridden by the concrete device.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Wire list is out of range or contains duplicates.
    #[error("Invalid wires: {0}")]
    InvalidWires(String),

    /// Probability vector length is not consistent with the wire count.
    #[error("Probability vector has length {got}, expected {expected}")]
    ProbabilityLength {
        /// Expected length (`2^k`).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Samples were requested before any were generated.
    #[error("No samples available: {0}")]
    NoSamples(String),

    /// Basis-state sampling failed.
    #[error("Sampling failed: {0}")]
    Sampling(String),

    /// Error from the circuit contract (e.g. a missing eigenvalue table).
    #[error(transparent)]
    Circuit(#[from] CircuitError),
}

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;
