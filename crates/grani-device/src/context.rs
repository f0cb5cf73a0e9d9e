//! Per-execution mutable device state.

use ndarray::Array2;

/// Mutable state a device carries across one execution.
///
/// Holds the computational-basis samples generated after the diagonalizing
/// rotations, shaped `(shots, num_wires)` with wire 0 in column 0, and the
/// hash of the last executed circuit. Both are overwritten wholesale on
/// each execution and cleared by a reset.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    samples: Option<Array2<u8>>,
    circuit_hash: Option<u64>,
}

impl ExecutionContext {
    /// Create an empty execution context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored samples, shape `(shots, num_wires)`.
    pub fn samples(&self) -> Option<&Array2<u8>> {
        self.samples.as_ref()
    }

    /// Replace the stored samples.
    pub fn set_samples(&mut self, samples: Array2<u8>) {
        self.samples = Some(samples);
    }

    /// Hash of the last executed circuit.
    pub fn circuit_hash(&self) -> Option<u64> {
        self.circuit_hash
    }

    /// Record the hash of the circuit being executed.
    pub fn set_circuit_hash(&mut self, hash: u64) {
        self.circuit_hash = Some(hash);
    }

    /// Return the context to its initial state.
    pub fn clear(&mut self) {
        self.samples = None;
        self.circuit_hash = None;
    }
}
