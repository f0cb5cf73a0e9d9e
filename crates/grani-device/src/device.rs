//! The qubit device trait.
//!
//! [`QubitDevice`] defines the lifecycle for executing a circuit and
//! turning the resulting joint distribution over basis states into
//! per-observable statistics:
//!
//! ```text
//!   check_validity() ──→ apply() ──→ generate_samples() ──→ statistics()
//!      (provided)       (abstract)     (if not analytic)     (provided)
//! ```
//!
//! # Design principles
//!
//! - **Synchronous**: one execution is a single call chain with no
//!   suspension points. Concurrent executions on one instance must be
//!   serialized by the caller.
//! - **Thin required surface**: a concrete device implements `apply` plus
//!   a handful of accessors; everything else has a default built on the
//!   probability engine.
//! - **Explicit execution state**: samples and the circuit hash live in an
//!   [`ExecutionContext`] owned by the device, overwritten wholesale per
//!   execution and cleared by `reset`.
//!
//! # Contract
//!
//! - Exact simulators MUST override `analytic_probability`.
//! - Devices that generate native computational-basis samples MUST
//!   override `generate_samples` and store rows shaped
//!   `(shots, num_wires)` with wire 0 in column 0.
//! - `apply` MUST leave the device able to produce probabilities or
//!   samples for the executed circuit.

use ndarray::{Array1, Array2, ArrayView1};
use num_complex::Complex64;
use tracing::{debug, instrument};

use grani_circuit::{Circuit, Observable, Operation, ReturnType, Wires};

use crate::capability::Capabilities;
use crate::context::ExecutionContext;
use crate::error::{DeviceError, DeviceResult};
use crate::measurement::{Measurements, Statistic};
use crate::probability;
use crate::sampling;

/// Observable names every qubit device supports out of the box.
pub const DEFAULT_OBSERVABLES: &[&str] = &[
    "Identity", "PauliX", "PauliY", "PauliZ", "Hadamard", "Hermitian",
];

/// Backend-specific options passed to `apply`.
///
/// Carries the hash of the circuit being executed so backends can reuse a
/// previously compiled parametric circuit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Stable hash of the circuit being executed.
    pub circuit_hash: Option<u64>,
}

/// Abstract base for qubit devices.
///
/// Concrete devices implement the required accessors and `apply`; exact
/// simulators additionally override `analytic_probability`, and hardware
/// that produces its own samples overrides `generate_samples`. The
/// provided statistics machinery handles everything downstream of the
/// joint probability distribution.
pub trait QubitDevice {
    /// Name of the device.
    fn name(&self) -> &str;

    /// Number of wires (subsystems) the device represents.
    fn num_wires(&self) -> usize;

    /// Number of circuit evaluations used to estimate statistics in
    /// sampled mode.
    fn shots(&self) -> usize;

    /// Whether statistics are computed exactly from the analytic
    /// distribution rather than estimated from samples.
    fn analytic(&self) -> bool;

    /// The per-execution mutable state.
    fn context(&self) -> &ExecutionContext;

    /// Mutable access to the per-execution state.
    fn context_mut(&mut self) -> &mut ExecutionContext;

    /// Apply the queued operations and the diagonalizing rotations, then
    /// compile and run the circuit.
    ///
    /// Abstract: every concrete device implements this. After it returns,
    /// the device must be able to answer `analytic_probability` (exact
    /// simulators) or produce native samples (hardware).
    fn apply(
        &mut self,
        operations: &[Operation],
        rotations: &[Operation],
        options: &ApplyOptions,
    ) -> DeviceResult<()>;

    /// Capabilities of the device.
    fn capabilities(&self) -> Capabilities {
        Capabilities::qubit()
    }

    /// Whether the device can apply the named operation.
    fn supports_operation(&self, name: &str) -> bool {
        let _ = name;
        true
    }

    /// Whether the device can measure the named observable.
    fn supports_observable(&self, name: &str) -> bool {
        DEFAULT_OBSERVABLES.contains(&name)
    }

    /// Check every queued operation and observable against the device's
    /// declared support, naming the first offender.
    fn check_validity(
        &self,
        operations: &[Operation],
        observables: &[Observable],
    ) -> DeviceResult<()> {
        let capabilities = self.capabilities();
        for op in operations {
            if !self.supports_operation(&op.name) {
                return Err(DeviceError::UnsupportedOperation(op.name.clone()));
            }
            if op.inverse && !capabilities.inverse_operations {
                return Err(DeviceError::UnsupportedOperation(format!(
                    "{} (inverse)",
                    op.name
                )));
            }
        }
        for obs in observables {
            if obs.is_tensor() {
                if !capabilities.tensor_observables {
                    return Err(DeviceError::UnsupportedObservable(obs.name().to_string()));
                }
                for factor in obs.factors() {
                    if !self.supports_observable(factor.name()) {
                        return Err(DeviceError::UnsupportedObservable(
                            factor.name().to_string(),
                        ));
                    }
                }
            } else if !self.supports_observable(obs.name()) {
                return Err(DeviceError::UnsupportedObservable(obs.name().to_string()));
            }
        }
        Ok(())
    }

    /// Reset the device to its just-constructed state: no samples, no
    /// circuit hash.
    fn reset(&mut self) {
        self.context_mut().clear();
    }

    /// Hash of the circuit from the last execution, for backend reuse.
    fn circuit_hash(&self) -> Option<u64> {
        self.context().circuit_hash()
    }

    /// State vector of the circuit prior to measurement.
    ///
    /// Only state-vector simulators support this; the default is
    /// unimplemented.
    fn state(&self) -> DeviceResult<Array1<Complex64>> {
        Err(DeviceError::NotImplemented("state"))
    }

    /// Map an observable's wire labels into the device's contiguous index
    /// space.
    ///
    /// The default is the identity with bounds checking; devices with
    /// non-contiguous wire labels override this.
    fn translate_wires(&self, wires: &Wires) -> DeviceResult<Vec<usize>> {
        let num_wires = self.num_wires();
        let indices = wires.indices();
        probability::check_wires(&indices, num_wires)?;
        Ok(indices)
    }

    /// Execute a circuit and measure its observables.
    ///
    /// Validates support, records the circuit hash, delegates to `apply`,
    /// generates samples when the device is not analytic or raw samples
    /// were requested, then computes the per-observable statistics.
    #[instrument(skip(self, circuit))]
    fn execute(&mut self, circuit: &Circuit) -> DeviceResult<Measurements> {
        self.check_validity(circuit.operations(), circuit.observables())?;

        let hash = circuit.hash();
        self.context_mut().set_circuit_hash(hash);

        debug!(
            device = self.name(),
            operations = circuit.operations().len(),
            observables = circuit.observables().len(),
            "executing circuit"
        );

        self.apply(
            circuit.operations(),
            circuit.rotations(),
            &ApplyOptions {
                circuit_hash: Some(hash),
            },
        )?;

        if !self.analytic() || circuit.is_sampled() {
            let samples = self.generate_samples()?;
            debug!(shots = samples.nrows(), "generated basis-state samples");
            self.context_mut().set_samples(samples);
        }

        self.statistics(circuit.observables())
    }

    /// Compute the statistic each observable requests.
    ///
    /// Observables without a return type contribute nothing.
    fn statistics(&self, observables: &[Observable]) -> DeviceResult<Measurements> {
        let mut results = Measurements::new();
        for obs in observables {
            match obs.return_type() {
                Some(ReturnType::Expectation) => {
                    results.push(Statistic::Expectation(self.expval(obs)?));
                }
                Some(ReturnType::Variance) => {
                    results.push(Statistic::Variance(self.var(obs)?));
                }
                Some(ReturnType::Sample) => {
                    results.push(Statistic::Samples(self.sample(obs)?));
                }
                Some(ReturnType::Probability) => {
                    let wires = self.translate_wires(obs.wires())?;
                    results.push(Statistic::Probabilities(self.probability(Some(&wires))?));
                }
                None => {}
            }
        }
        Ok(results)
    }

    /// Generate computational-basis samples for all wires.
    ///
    /// The default draws `shots` basis-state indices weighted by the
    /// analytic distribution and expands them big-endian. Devices that
    /// generate their own samples override this wholesale.
    fn generate_samples(&mut self) -> DeviceResult<Array2<u8>> {
        let num_wires = self.num_wires();
        let number_of_states = 1usize << num_wires;
        let prob = self.analytic_probability(None)?;
        let states = self.sample_basis_states(number_of_states, prob.view())?;
        Ok(sampling::states_to_binary(&states, num_wires))
    }

    /// Draw `shots` basis-state indices with replacement, weighted by
    /// `probabilities`.
    fn sample_basis_states(
        &self,
        number_of_states: usize,
        probabilities: ArrayView1<'_, f64>,
    ) -> DeviceResult<Vec<usize>> {
        sampling::sample_basis_states(number_of_states, probabilities, self.shots())
    }

    /// Analytic (marginal) probability of each basis state after the last
    /// execution.
    ///
    /// Abstract for exact simulators; the default is unimplemented.
    /// [`QubitDevice::marginal_prob`] is the intended utility for the
    /// marginalization step.
    fn analytic_probability(&self, wires: Option<&[usize]>) -> DeviceResult<Array1<f64>> {
        let _ = wires;
        Err(DeviceError::NotImplemented("analytic_probability"))
    }

    /// Estimate the (marginal) probability of each basis state from the
    /// stored samples.
    ///
    /// Selects the requested wire columns, maps each shot to a basis-state
    /// index (first requested wire most significant), counts occurrences,
    /// and normalizes by the shot count. Handles any wire order.
    fn estimate_probability(&self, wires: Option<&[usize]>) -> DeviceResult<Array1<f64>> {
        let all_wires: Vec<usize>;
        let wires = match wires {
            Some(wires) => wires,
            None => {
                all_wires = (0..self.num_wires()).collect();
                &all_wires
            }
        };
        probability::check_wires(wires, self.num_wires())?;

        let samples = self.context().samples().ok_or_else(|| {
            DeviceError::NoSamples("estimate_probability called before sample generation".into())
        })?;
        let shots = samples.nrows();
        if shots == 0 {
            return Err(DeviceError::Sampling(
                "cannot estimate probabilities from zero shots".into(),
            ));
        }

        let mut prob = Array1::<f64>::zeros(1usize << wires.len());
        for row in samples.rows() {
            let index = probability::ravel_index(wires.iter().map(|&w| row[w]));
            prob[index] += 1.0;
        }
        prob.mapv_inplace(|count| count / shots as f64);
        Ok(prob)
    }

    /// Analytic or estimated probability, depending on the device mode.
    fn probability(&self, wires: Option<&[usize]>) -> DeviceResult<Array1<f64>> {
        if self.analytic() {
            self.analytic_probability(wires)
        } else {
            self.estimate_probability(wires)
        }
    }

    /// Marginalize a full-resolution probability vector onto a wire
    /// subset, honouring the caller's wire ordering.
    fn marginal_prob(
        &self,
        prob: ArrayView1<'_, f64>,
        wires: Option<&[usize]>,
    ) -> DeviceResult<Array1<f64>> {
        probability::marginal_prob(prob, self.num_wires(), wires)
    }

    /// Expectation value of an observable.
    ///
    /// Analytic mode: `eigvals · prob` over the observable's wires.
    /// Sampled mode: mean of the per-shot eigenvalues.
    fn expval(&self, observable: &Observable) -> DeviceResult<f64> {
        let wires = self.translate_wires(observable.wires())?;

        if self.analytic() {
            let eigvals = observable.eigvals()?;
            let prob = self.probability(Some(&wires))?;
            return Ok(eigvals.dot(&prob));
        }

        let samples = self.sample(observable)?;
        samples.mean().ok_or_else(|| {
            DeviceError::Sampling(format!(
                "no samples to average for {}",
                observable.name()
            ))
        })
    }

    /// Variance of an observable.
    ///
    /// Analytic mode: `eigvals² · prob − (eigvals · prob)²`.
    /// Sampled mode: population variance of the per-shot eigenvalues.
    fn var(&self, observable: &Observable) -> DeviceResult<f64> {
        let wires = self.translate_wires(observable.wires())?;

        if self.analytic() {
            let eigvals = observable.eigvals()?;
            let prob = self.probability(Some(&wires))?;
            let mean = eigvals.dot(&prob);
            return Ok(eigvals.mapv(|e| e * e).dot(&prob) - mean * mean);
        }

        let samples = self.sample(observable)?;
        let mean = samples.mean().ok_or_else(|| {
            DeviceError::Sampling(format!(
                "no samples to average for {}",
                observable.name()
            ))
        })?;
        let n = samples.len() as f64;
        Ok(samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n)
    }

    /// Per-shot eigenvalues of an observable.
    ///
    /// Pauli-basis single-wire observables map each sampled bit `b` to
    /// `1 - 2b`; general observables look up the joint basis-state index
    /// over their wires in the eigenvalue table.
    fn sample(&self, observable: &Observable) -> DeviceResult<Array1<f64>> {
        let wires = self.translate_wires(observable.wires())?;
        let samples = self.context().samples().ok_or_else(|| {
            DeviceError::NoSamples(format!(
                "sample of {} requested before sample generation",
                observable.name()
            ))
        })?;

        if observable.is_pauli_basis() && wires.len() == 1 {
            // Eigenvalues {1, -1}: bit b maps to 1 - 2b.
            let column = samples.column(wires[0]);
            return Ok(column.mapv(|bit| 1.0 - 2.0 * f64::from(bit)));
        }

        let eigvals = observable.eigvals()?;
        let mut out = Array1::zeros(samples.nrows());
        for (shot, row) in samples.rows().into_iter().enumerate() {
            let index = probability::ravel_index(wires.iter().map(|&w| row[w]));
            out[shot] = eigvals[index];
        }
        Ok(out)
    }
}
