//! Executable circuit: ordered operations, diagonalizing rotations, and
//! observables, with a stable hash for parametric-compilation reuse.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::observable::{Observable, ReturnType};
use crate::operation::Operation;

/// An executable circuit handed to a device.
///
/// Holds the ordered operation queue, the diagonalizing rotations that put
/// every observable into the computational basis, and the observables to
/// be measured. The circuit is immutable once handed to a device; the
/// device records its [`hash`](Circuit::hash) so backends can recognise a
/// previously compiled circuit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circuit {
    operations: Vec<Operation>,
    rotations: Vec<Operation>,
    observables: Vec<Observable>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Append a diagonalizing rotation.
    pub fn with_rotation(mut self, rotation: Operation) -> Self {
        self.rotations.push(rotation);
        self
    }

    /// Append an observable.
    pub fn with_observable(mut self, observable: Observable) -> Self {
        self.observables.push(observable);
        self
    }

    /// Ordered operation queue.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Rotations that diagonalize the observables pre-measurement.
    pub fn rotations(&self) -> &[Operation] {
        &self.rotations
    }

    /// Observables to be measured, in order.
    pub fn observables(&self) -> &[Observable] {
        &self.observables
    }

    /// Whether any observable requests raw per-shot samples.
    pub fn is_sampled(&self) -> bool {
        self.observables
            .iter()
            .any(|obs| obs.return_type() == Some(ReturnType::Sample))
    }

    /// Stable hash of the circuit structure.
    ///
    /// Covers operation names, wires, parameter bit patterns, and inverse
    /// flags, plus rotations and observable structure. Two identically
    /// built circuits hash equal; changing any parameter changes the hash.
    pub fn hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        for op in self.operations.iter().chain(self.rotations.iter()) {
            hash_operation(op, &mut hasher);
        }
        for obs in &self.observables {
            hash_observable(obs, &mut hasher);
        }
        hasher.finish()
    }
}

fn hash_operation(op: &Operation, hasher: &mut FxHasher) {
    op.name.hash(hasher);
    op.wires.indices().hash(hasher);
    for param in &op.parameters {
        param.to_bits().hash(hasher);
    }
    op.inverse.hash(hasher);
}

fn hash_observable(obs: &Observable, hasher: &mut FxHasher) {
    obs.name().hash(hasher);
    obs.wires().indices().hash(hasher);
    obs.return_type().hash(hasher);
    if let Ok(eigvals) = obs.eigvals() {
        for val in eigvals.iter() {
            val.to_bits().hash(hasher);
        }
    }
}
