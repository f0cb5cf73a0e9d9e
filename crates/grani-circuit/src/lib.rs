//! Grani circuit contract
//!
//! The narrow contract consumed by the device layer: operations queued for
//! execution, observables with return-type tags and eigenvalue tables, and
//! the executable [`Circuit`] that bundles them with the diagonalizing
//! rotations and a stable hash.
//!
//! This crate deliberately carries no circuit-construction, compilation,
//! or differentiation machinery — it is the data the measurement layer
//! needs, nothing more.
//!
//! # Conventions
//!
//! - Basis states are big-endian across wires: wire 0 is the most
//!   significant bit of the basis-state index.
//! - Eigenvalue tables are indexed by basis-state index within the
//!   observable's own wire subset, using the same convention.
//!
//! # Example
//!
//! ```
//! use grani_circuit::{Circuit, Observable, Operation, ReturnType};
//!
//! let circuit = Circuit::new()
//!     .with_operation(Operation::new("Hadamard", [0usize]))
//!     .with_operation(Operation::new("CNOT", [0usize, 1]))
//!     .with_observable(Observable::new("PauliZ", [0usize]).returning(ReturnType::Expectation));
//!
//! assert!(!circuit.is_sampled());
//! assert_eq!(circuit.observables().len(), 1);
//! ```

pub mod circuit;
pub mod error;
pub mod observable;
pub mod operation;
pub mod wire;

pub use circuit::Circuit;
pub use error::{CircuitError, CircuitResult};
pub use observable::{Observable, PAULI_BASIS, ReturnType};
pub use operation::{Operation, active_wires};
pub use wire::{WireId, Wires};
