//! Probability marginalization and basis-state indexing.
//!
//! Probability vectors are indexed by basis-state integer, big-endian
//! across wires (wire 0 = most significant bit). Marginalization sums out
//! the wires not in the requested subset; when the requested wires are not
//! in increasing order, the marginal is permuted so bit significance
//! follows the caller's wire ordering.

use ndarray::{Array1, ArrayView1, Axis, IxDyn};

use crate::error::{DeviceError, DeviceResult};

/// Map a bit sequence to its basis-state index.
///
/// Mixed-radix base-2 in the given order: the first bit is the most
/// significant.
pub fn ravel_index(bits: impl IntoIterator<Item = u8>) -> usize {
    bits.into_iter()
        .fold(0usize, |acc, bit| (acc << 1) | usize::from(bit & 1))
}

/// Check that a wire list is a duplicate-free subset of `[0, num_wires)`.
pub fn check_wires(wires: &[usize], num_wires: usize) -> DeviceResult<()> {
    for (i, &wire) in wires.iter().enumerate() {
        if wire >= num_wires {
            return Err(DeviceError::InvalidWires(format!(
                "w{wire} out of range for a {num_wires}-wire device"
            )));
        }
        if wires[..i].contains(&wire) {
            return Err(DeviceError::InvalidWires(format!("w{wire} listed twice")));
        }
    }
    Ok(())
}

/// Marginalize a full-resolution probability vector onto a wire subset.
///
/// `prob` must have length `2^num_wires`. With `wires == None` the input
/// is returned unchanged. Otherwise the vector is reshaped into an
/// `num_wires`-dimensional tensor (one axis per wire), the axes not in
/// `wires` are summed out, and the flattened marginal is permuted so that
/// its basis-state indices read big-endian in the caller's wire order.
///
/// For example, with `wires = [2, 0]` the marginal entry for basis state
/// `10` (wire 2 = 1, wire 0 = 0) carries the probability mass the
/// `[0, 2]`-ordered marginal holds at basis state `01`.
pub fn marginal_prob(
    prob: ArrayView1<'_, f64>,
    num_wires: usize,
    wires: Option<&[usize]>,
) -> DeviceResult<Array1<f64>> {
    let Some(wires) = wires else {
        // No marginalization requested.
        return Ok(prob.to_owned());
    };

    check_wires(wires, num_wires)?;
    let expected = 1usize << num_wires;
    if prob.len() != expected {
        return Err(DeviceError::ProbabilityLength {
            expected,
            got: prob.len(),
        });
    }

    // One axis per wire, then sum out the inactive axes. Summing in
    // descending axis order keeps the remaining axis indices valid.
    let shape: Vec<usize> = vec![2; num_wires];
    let mut tensor = prob
        .to_owned()
        .into_shape_with_order(IxDyn(&shape))
        .map_err(|e| DeviceError::InvalidWires(e.to_string()))?;
    let mut inactive: Vec<usize> = (0..num_wires).filter(|w| !wires.contains(w)).collect();
    inactive.sort_unstable();
    for &axis in inactive.iter().rev() {
        tensor = tensor.sum_axis(Axis(axis));
    }
    let marginal = Array1::from_iter(tensor.iter().copied());

    if wires.windows(2).all(|pair| pair[0] < pair[1]) {
        return Ok(marginal);
    }

    // The marginal's remaining axes are in ascending wire order. Reindex
    // via the double-argsort rank permutation so bit significance follows
    // the caller's wire ordering instead.
    let rank = argsort(&argsort(wires));
    let k = wires.len();
    let mut permuted = Array1::zeros(1 << k);
    for (index, value) in permuted.iter_mut().enumerate() {
        let mut source = 0usize;
        for position in 0..k {
            let bit = (index >> (k - 1 - rank[position])) & 1;
            source = (source << 1) | bit;
        }
        *value = marginal[source];
    }
    Ok(permuted)
}

/// Indices that would sort `values` ascending.
fn argsort(values: &[usize]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by_key(|&i| values[i]);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const TOL: f64 = 1e-12;

    fn assert_close(a: &Array1<f64>, b: &Array1<f64>) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < TOL, "{a} != {b}");
        }
    }

    #[test]
    fn test_ravel_index_big_endian() {
        assert_eq!(ravel_index([1, 0, 1]), 5);
        assert_eq!(ravel_index([0, 0]), 0);
        assert_eq!(ravel_index([1, 1, 1, 1]), 15);
    }

    #[test]
    fn test_no_wires_is_identity() {
        let prob = array![0.1, 0.2, 0.3, 0.4];
        let marginal = marginal_prob(prob.view(), 2, None).unwrap();
        assert_close(&marginal, &prob);
    }

    #[test]
    fn test_marginal_single_wire() {
        // P = [P(00), P(01), P(10), P(11)]; wire 0 is the MSB.
        let prob = array![0.5, 0.0, 0.5, 0.0];
        let w0 = marginal_prob(prob.view(), 2, Some(&[0])).unwrap();
        assert_close(&w0, &array![0.5, 0.5]);
        let w1 = marginal_prob(prob.view(), 2, Some(&[1])).unwrap();
        assert_close(&w1, &array![1.0, 0.0]);
    }

    #[test]
    fn test_marginal_of_uniform_is_uniform_in_any_order() {
        let prob = Array1::from_elem(8, 0.125);
        let forward = marginal_prob(prob.view(), 3, Some(&[0, 2])).unwrap();
        let reversed = marginal_prob(prob.view(), 3, Some(&[2, 0])).unwrap();
        assert_close(&forward, &Array1::from_elem(4, 0.25));
        assert_close(&reversed, &Array1::from_elem(4, 0.25));
    }

    #[test]
    fn test_marginal_reordering_non_uniform() {
        // Weight each 3-wire basis state by its index so every marginal
        // entry is distinct.
        let total: f64 = (0..8).map(f64::from).sum();
        let prob = Array1::from_iter((0..8).map(|i| f64::from(i) / total));

        let ordered = marginal_prob(prob.view(), 3, Some(&[0, 2])).unwrap();
        let permuted = marginal_prob(prob.view(), 3, Some(&[2, 0])).unwrap();

        // Basis state "10" on wires [2, 0] is "01" on wires [0, 2].
        assert!((permuted[0b10] - ordered[0b01]).abs() < TOL);
        assert!((permuted[0b01] - ordered[0b10]).abs() < TOL);
        assert!((permuted[0b00] - ordered[0b00]).abs() < TOL);
        assert!((permuted[0b11] - ordered[0b11]).abs() < TOL);
    }

    #[test]
    fn test_marginal_sums_to_one() {
        let prob = array![0.05, 0.15, 0.2, 0.1, 0.25, 0.05, 0.1, 0.1];
        let marginal = marginal_prob(prob.view(), 3, Some(&[1])).unwrap();
        assert!((marginal.sum() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let prob = array![0.5, 0.5];
        let result = marginal_prob(prob.view(), 2, Some(&[0]));
        assert!(matches!(
            result,
            Err(DeviceError::ProbabilityLength {
                expected: 4,
                got: 2
            })
        ));
    }

    #[test]
    fn test_out_of_range_wire_rejected() {
        let prob = array![0.25, 0.25, 0.25, 0.25];
        assert!(matches!(
            marginal_prob(prob.view(), 2, Some(&[2])),
            Err(DeviceError::InvalidWires(_))
        ));
    }

    #[test]
    fn test_duplicate_wire_rejected() {
        assert!(matches!(
            check_wires(&[0, 1, 0], 3),
            Err(DeviceError::InvalidWires(_))
        ));
    }
}
