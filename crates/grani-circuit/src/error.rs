//! Error types for the circuit crate.

use thiserror::Error;

/// Errors that can occur while building or querying circuit entities.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// Observable has no eigenvalue table and is not in the Pauli basis.
    #[error("Observable {0} has no eigenvalue table")]
    MissingEigenvalues(String),

    /// Eigenvalue table length does not match the observable's wire count.
    #[error("Observable {name} has an eigenvalue table of length {got}, expected {expected}")]
    EigenvalueLength {
        /// Name of the observable.
        name: String,
        /// Expected table length (`2^k` for `k` wires).
        expected: usize,
        /// Actual table length.
        got: usize,
    },

    /// Tensor factors act on overlapping wires.
    #[error("Tensor factors act on overlapping wires: {0}")]
    OverlappingWires(String),

    /// Tensor observable with no factors.
    #[error("Tensor observable requires at least one factor")]
    EmptyTensor,
}

/// Result type for circuit operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
