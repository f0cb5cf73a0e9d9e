//! Device capability introspection.
//!
//! A device declares what it can do through a [`Capabilities`] descriptor:
//! the computational model, whether tensor-product observables are
//! supported, whether operations may be applied inverted, and whether the
//! pre-measurement state vector is accessible. Orchestrating code reads
//! the descriptor to decide what it may ask of a device.

use serde::{Deserialize, Serialize};

/// Computational model of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceModel {
    /// Discrete qubit model.
    Qubit,
    /// Continuous-variable model.
    ContinuousVariable,
}

/// Capabilities of a device.
///
/// Qubit devices built on this crate have built-in support for tensor
/// observables, so [`Capabilities::qubit`] sets `tensor_observables` by
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Computational model.
    pub model: DeviceModel,
    /// Whether tensor-product observables can be measured.
    pub tensor_observables: bool,
    /// Whether operations flagged as inverted are supported.
    pub inverse_operations: bool,
    /// Whether the pre-measurement state vector is accessible.
    pub returns_state: bool,
}

impl Capabilities {
    /// Capabilities of a standard qubit device.
    pub fn qubit() -> Self {
        Self {
            model: DeviceModel::Qubit,
            tensor_observables: true,
            inverse_operations: false,
            returns_state: false,
        }
    }

    /// Declare support for inverted operations.
    pub fn with_inverse_operations(mut self, supported: bool) -> Self {
        self.inverse_operations = supported;
        self
    }

    /// Declare state-vector access.
    pub fn with_returns_state(mut self, supported: bool) -> Self {
        self.returns_state = supported;
        self
    }
}
