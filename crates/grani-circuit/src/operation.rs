//! Circuit operations.

use std::collections::BTreeSet;

use crate::wire::{WireId, Wires};

/// A quantum operation queued for application on a device.
///
/// Operations are opaque to this layer: the device backend interprets the
/// name and parameters. Useful properties are the name, the wires acted on,
/// the parameter list, and the inverse flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Name of the operation (e.g. `"RX"`, `"CNOT"`).
    pub name: String,
    /// Wires the operation acts on.
    pub wires: Wires,
    /// Real-valued parameters (e.g. rotation angles).
    pub parameters: Vec<f64>,
    /// Whether the inverse of the operation should be applied.
    pub inverse: bool,
}

impl Operation {
    /// Create a new operation with no parameters.
    pub fn new(name: impl Into<String>, wires: impl Into<Wires>) -> Self {
        Self {
            name: name.into(),
            wires: wires.into(),
            parameters: Vec::new(),
            inverse: false,
        }
    }

    /// Set the operation parameters.
    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = f64>) -> Self {
        self.parameters = parameters.into_iter().collect();
        self
    }

    /// Mark the operation as inverted.
    pub fn inv(mut self) -> Self {
        self.inverse = !self.inverse;
        self
    }

    /// Number of wires the operation acts on.
    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }
}

/// Returns the wires acted on by a set of operations.
///
/// The result is sorted by wire index, so iteration order is deterministic.
pub fn active_wires<'a, I>(operations: I) -> BTreeSet<WireId>
where
    I: IntoIterator<Item = &'a Operation>,
{
    let mut wires = BTreeSet::new();
    for op in operations {
        wires.extend(op.wires.iter());
    }
    wires
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_builder() {
        let op = Operation::new("RX", [0usize]).with_parameters([0.2]);
        assert_eq!(op.name, "RX");
        assert_eq!(op.wires.indices(), vec![0]);
        assert_eq!(op.parameters, vec![0.2]);
        assert!(!op.inverse);
    }

    #[test]
    fn test_operation_inv_toggles() {
        let op = Operation::new("S", [1usize]).inv();
        assert!(op.inverse);
        assert!(!op.inv().inverse);
    }

    #[test]
    fn test_active_wires() {
        let ops = [
            Operation::new("CNOT", [3usize, 1]),
            Operation::new("H", [0usize]),
            Operation::new("RZ", [1usize]).with_parameters([1.0]),
        ];
        let wires = active_wires(&ops);
        assert_eq!(
            wires.into_iter().collect::<Vec<_>>(),
            vec![WireId(0), WireId(1), WireId(3)]
        );
    }
}
