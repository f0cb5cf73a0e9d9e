//! Weighted basis-state sampling.
//!
//! The default sampling path draws basis-state indices with replacement,
//! weighted by the analytic probability distribution, then expands each
//! index into its big-endian binary representation. Devices that generate
//! native samples bypass this module entirely.

use ndarray::{Array2, ArrayView1};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use crate::error::{DeviceError, DeviceResult};

/// Draw `shots` basis-state indices with replacement, weighted by
/// `probabilities`.
///
/// Uses the thread-local RNG. For a seedable draw (tests, reproducible
/// runs) use [`sample_basis_states_with_rng`].
pub fn sample_basis_states(
    number_of_states: usize,
    probabilities: ArrayView1<'_, f64>,
    shots: usize,
) -> DeviceResult<Vec<usize>> {
    sample_basis_states_with_rng(number_of_states, probabilities, shots, &mut rand::thread_rng())
}

/// Draw `shots` basis-state indices with replacement using the given RNG.
///
/// Fails if the weight vector does not cover `number_of_states` entries or
/// cannot form a distribution (all zero, negative, or non-finite weights).
pub fn sample_basis_states_with_rng<R: Rng + ?Sized>(
    number_of_states: usize,
    probabilities: ArrayView1<'_, f64>,
    shots: usize,
    rng: &mut R,
) -> DeviceResult<Vec<usize>> {
    if probabilities.len() != number_of_states {
        return Err(DeviceError::Sampling(format!(
            "{} weights supplied for {} basis states",
            probabilities.len(),
            number_of_states
        )));
    }

    let distribution = WeightedIndex::new(probabilities.iter().copied())
        .map_err(|e| DeviceError::Sampling(e.to_string()))?;

    Ok((0..shots).map(|_| distribution.sample(rng)).collect())
}

/// Expand basis-state indices into their binary representation.
///
/// Returns one row per sample and one column per wire, with wire 0 in
/// column 0 as the most significant bit of the basis-state index.
pub fn states_to_binary(samples: &[usize], num_wires: usize) -> Array2<u8> {
    let mut out = Array2::zeros((samples.len(), num_wires));
    for (row, &state) in samples.iter().enumerate() {
        for wire in 0..num_wires {
            // wire 0 is the most significant bit
            out[[row, wire]] = ((state >> (num_wires - 1 - wire)) & 1) as u8;
        }
    }
    out
}
