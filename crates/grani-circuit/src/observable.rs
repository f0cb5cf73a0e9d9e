//! Observables and measurement return types.
//!
//! An observable pairs a wire subset with an eigenvalue table indexed by
//! basis-state index (big-endian over the observable's wires). Observables
//! in the Pauli measurement basis (`PauliX`, `PauliY`, `PauliZ`,
//! `Hadamard`) have the implied table `[1, -1]` and never store one.
//!
//! Tensor observables compose single-subsystem factors: the wire list is
//! the concatenation of the factor wires and the eigenvalue table is the
//! Kronecker product of the factor tables.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, CircuitResult};
use crate::wire::Wires;

/// What statistic the caller wants for an observable.
///
/// Closed set: the statistics dispatcher matches exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnType {
    /// Expectation value of the observable.
    Expectation,
    /// Variance of the observable.
    Variance,
    /// Raw per-shot eigenvalue samples.
    Sample,
    /// (Marginal) probability vector over the observable's wires.
    Probability,
}

/// Observable names whose eigenvalues are `{1, -1}` after basis rotation.
pub const PAULI_BASIS: [&str; 4] = ["PauliX", "PauliY", "PauliZ", "Hadamard"];

/// A measurable observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Observable {
    name: String,
    wires: Wires,
    return_type: Option<ReturnType>,
    eigvals: Option<Array1<f64>>,
    factors: Vec<Observable>,
}

impl Observable {
    /// Create a new observable with no return type and no eigenvalue table.
    pub fn new(name: impl Into<String>, wires: impl Into<Wires>) -> Self {
        Self {
            name: name.into(),
            wires: wires.into(),
            return_type: None,
            eigvals: None,
            factors: Vec::new(),
        }
    }

    /// Set the requested return type.
    pub fn returning(mut self, return_type: ReturnType) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Attach an explicit eigenvalue table.
    ///
    /// The table is indexed by basis-state index over the observable's
    /// wires and must have length `2^k` for `k` wires; the length is
    /// checked when the table is read back via [`Observable::eigvals`].
    pub fn with_eigvals(mut self, eigvals: impl Into<Array1<f64>>) -> Self {
        self.eigvals = Some(eigvals.into());
        self
    }

    /// Compose a tensor observable from single-subsystem factors.
    ///
    /// Factor wires must be disjoint. Every factor must be able to produce
    /// an eigenvalue table; the tensor's table is their Kronecker product
    /// in factor order.
    pub fn tensor(factors: impl IntoIterator<Item = Observable>) -> CircuitResult<Self> {
        let factors: Vec<Observable> = factors.into_iter().collect();
        if factors.is_empty() {
            return Err(CircuitError::EmptyTensor);
        }

        let mut wires: Vec<usize> = Vec::new();
        let mut eigvals = Array1::from_elem(1, 1.0);
        let mut names = Vec::with_capacity(factors.len());
        for factor in &factors {
            for wire in factor.wires.iter() {
                if wires.contains(&wire.0) {
                    return Err(CircuitError::OverlappingWires(wire.to_string()));
                }
                wires.push(wire.0);
            }
            eigvals = kron(&eigvals, &factor.eigvals()?);
            names.push(factor.name.clone());
        }

        Ok(Self {
            name: names.join(" @ "),
            wires: Wires::new(wires),
            return_type: None,
            eigvals: Some(eigvals),
            factors,
        })
    }

    /// Name of the observable. Tensor observables join factor names
    /// with `" @ "`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wires the observable acts on.
    pub fn wires(&self) -> &Wires {
        &self.wires
    }

    /// The requested return type, if any.
    pub fn return_type(&self) -> Option<ReturnType> {
        self.return_type
    }

    /// Whether this observable measures in the Pauli basis and therefore
    /// has implied eigenvalues `{1, -1}`.
    pub fn is_pauli_basis(&self) -> bool {
        PAULI_BASIS.contains(&self.name.as_str())
    }

    /// Whether this is a tensor product of factors.
    pub fn is_tensor(&self) -> bool {
        !self.factors.is_empty()
    }

    /// Factor observables of a tensor product (empty for plain observables).
    pub fn factors(&self) -> &[Observable] {
        &self.factors
    }

    /// The eigenvalue table, indexed by basis-state index over the
    /// observable's wires.
    ///
    /// Pauli-basis observables yield the implied `[1, -1]`. Any other
    /// observable must carry an explicit table of length `2^k`.
    pub fn eigvals(&self) -> CircuitResult<Array1<f64>> {
        if let Some(eigvals) = &self.eigvals {
            let expected = 1usize << self.wires.len();
            if eigvals.len() != expected {
                return Err(CircuitError::EigenvalueLength {
                    name: self.name.clone(),
                    expected,
                    got: eigvals.len(),
                });
            }
            return Ok(eigvals.clone());
        }

        if self.is_pauli_basis() && self.wires.len() == 1 {
            return Ok(Array1::from_vec(vec![1.0, -1.0]));
        }

        Err(CircuitError::MissingEigenvalues(self.name.clone()))
    }
}

/// Kronecker product of two eigenvalue tables.
fn kron(a: &Array1<f64>, b: &Array1<f64>) -> Array1<f64> {
    let mut out = Array1::zeros(a.len() * b.len());
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i * b.len() + j] = x * y;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_pauli_implied_eigvals() {
        let obs = Observable::new("PauliZ", [0usize]).returning(ReturnType::Expectation);
        assert!(obs.is_pauli_basis());
        assert_eq!(obs.eigvals().unwrap(), array![1.0, -1.0]);
    }

    #[test]
    fn test_missing_eigvals_is_an_error() {
        let obs = Observable::new("Hermitian", [0usize, 1]);
        assert!(matches!(
            obs.eigvals(),
            Err(CircuitError::MissingEigenvalues(name)) if name == "Hermitian"
        ));
    }

    #[test]
    fn test_eigval_length_checked() {
        let obs = Observable::new("Hermitian", [0usize, 1]).with_eigvals(array![1.0, -1.0]);
        assert!(matches!(
            obs.eigvals(),
            Err(CircuitError::EigenvalueLength {
                expected: 4,
                got: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_tensor_kron_eigvals() {
        let zz = Observable::tensor([
            Observable::new("PauliZ", [0usize]),
            Observable::new("PauliZ", [1usize]),
        ])
        .unwrap();
        assert!(zz.is_tensor());
        assert_eq!(zz.name(), "PauliZ @ PauliZ");
        assert_eq!(zz.wires().indices(), vec![0, 1]);
        assert_eq!(zz.eigvals().unwrap(), array![1.0, -1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_tensor_overlapping_wires_rejected() {
        let result = Observable::tensor([
            Observable::new("PauliZ", [0usize]),
            Observable::new("PauliX", [0usize]),
        ]);
        assert!(matches!(result, Err(CircuitError::OverlappingWires(_))));
    }

    #[test]
    fn test_tensor_requires_factors() {
        assert!(matches!(
            Observable::tensor([]),
            Err(CircuitError::EmptyTensor)
        ));
    }

    #[test]
    fn test_return_type_serialises() {
        let json = serde_json::to_string(&ReturnType::Expectation).unwrap();
        let back: ReturnType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ReturnType::Expectation);
    }
}
