//! Grani qubit device layer
//!
//! This crate provides the abstract [`QubitDevice`] trait: a statistical
//! post-processing layer that turns a joint probability distribution over
//! `2^N` basis states into per-observable measurement statistics —
//! expectation values, variances, raw samples, and (marginal) probability
//! vectors — either exactly or by Monte-Carlo sampling of basis states.
//!
//! # Overview
//!
//! - [`QubitDevice`] — the trait concrete simulator and hardware devices
//!   implement. The required surface is small (`apply` plus accessors);
//!   the statistics machinery is provided.
//! - [`Capabilities`] — what a device declares it can do.
//! - [`ExecutionContext`] — the per-execution mutable state (samples,
//!   circuit hash).
//! - [`Measurements`] / [`Statistic`] — ordered, possibly heterogeneous
//!   per-observable results.
//! - [`sampling`] / [`probability`] — the weighted basis-state sampler and
//!   the marginalization engine backing the provided methods.
//!
//! # Implementing a device
//!
//! ```
//! use grani_circuit::Operation;
//! use grani_device::{
//!     ApplyOptions, DeviceResult, ExecutionContext, QubitDevice,
//! };
//! use ndarray::Array1;
//!
//! /// Two-wire device pinned to a fixed analytic distribution.
//! struct FixedDevice {
//!     prob: Array1<f64>,
//!     context: ExecutionContext,
//! }
//!
//! impl QubitDevice for FixedDevice {
//!     fn name(&self) -> &str {
//!         "fixed.qubit"
//!     }
//!
//!     fn num_wires(&self) -> usize {
//!         2
//!     }
//!
//!     fn shots(&self) -> usize {
//!         1000
//!     }
//!
//!     fn analytic(&self) -> bool {
//!         true
//!     }
//!
//!     fn context(&self) -> &ExecutionContext {
//!         &self.context
//!     }
//!
//!     fn context_mut(&mut self) -> &mut ExecutionContext {
//!         &mut self.context
//!     }
//!
//!     fn apply(
//!         &mut self,
//!         _operations: &[Operation],
//!         _rotations: &[Operation],
//!         _options: &ApplyOptions,
//!     ) -> DeviceResult<()> {
//!         Ok(())
//!     }
//!
//!     fn analytic_probability(&self, wires: Option<&[usize]>) -> DeviceResult<Array1<f64>> {
//!         self.marginal_prob(self.prob.view(), wires)
//!     }
//! }
//!
//! let device = FixedDevice {
//!     prob: Array1::from_vec(vec![0.5, 0.0, 0.5, 0.0]),
//!     context: ExecutionContext::new(),
//! };
//! let prob = device.probability(Some(&[0])).unwrap();
//! assert!((prob[0] - 0.5).abs() < 1e-12);
//! ```

pub mod capability;
pub mod context;
pub mod device;
pub mod error;
pub mod measurement;
pub mod probability;
pub mod sampling;

pub use capability::{Capabilities, DeviceModel};
pub use context::ExecutionContext;
pub use device::{ApplyOptions, DEFAULT_OBSERVABLES, QubitDevice};
pub use error::{DeviceError, DeviceResult};
pub use measurement::{Measurements, Statistic};
pub use probability::{marginal_prob, ravel_index};
pub use sampling::{sample_basis_states, sample_basis_states_with_rng, states_to_binary};
