//! Property-based tests for probability marginalization and basis-state
//! indexing.

use grani_device::{marginal_prob, ravel_index, states_to_binary};
use ndarray::Array1;
use proptest::prelude::*;

const TOL: f64 = 1e-9;

/// A normalized probability vector over `2^num_wires` basis states.
fn arb_prob(num_wires: usize) -> impl Strategy<Value = Array1<f64>> {
    prop::collection::vec(0.0f64..1.0, 1 << num_wires).prop_map(|mut weights| {
        if weights.iter().sum::<f64>() == 0.0 {
            weights[0] = 1.0;
        }
        let total: f64 = weights.iter().sum();
        Array1::from_iter(weights.into_iter().map(|w| w / total))
    })
}

/// A wire count, a distribution over it, and a shuffled non-empty wire
/// subset.
fn arb_case() -> impl Strategy<Value = (usize, Array1<f64>, Vec<usize>)> {
    (1usize..=5).prop_flat_map(|num_wires| {
        (
            Just(num_wires),
            arb_prob(num_wires),
            prop::sample::subsequence((0..num_wires).collect::<Vec<_>>(), 1..=num_wires)
                .prop_shuffle(),
        )
    })
}

proptest! {
    /// Marginalizing never loses probability mass.
    #[test]
    fn marginal_sums_to_one((num_wires, prob, wires) in arb_case()) {
        let marginal = marginal_prob(prob.view(), num_wires, Some(&wires)).unwrap();
        prop_assert_eq!(marginal.len(), 1 << wires.len());
        prop_assert!((marginal.sum() - 1.0).abs() < TOL);
    }

    /// No wire subset means no marginalization.
    #[test]
    fn no_wires_is_identity((num_wires, prob, _wires) in arb_case()) {
        let out = marginal_prob(prob.view(), num_wires, None).unwrap();
        prop_assert_eq!(out, prob);
    }

    /// Marginalizing onto all wires in increasing order is the identity.
    #[test]
    fn full_ordered_subset_is_identity((num_wires, prob, _wires) in arb_case()) {
        let all: Vec<usize> = (0..num_wires).collect();
        let out = marginal_prob(prob.view(), num_wires, Some(&all)).unwrap();
        for (a, b) in out.iter().zip(prob.iter()) {
            prop_assert!((a - b).abs() < TOL);
        }
    }

    /// Reversing the wire order reverses the bit significance: entry `i`
    /// of the forward marginal equals the bit-reversed entry of the
    /// reversed marginal.
    #[test]
    fn reversed_wire_order_reverses_bits((num_wires, prob, wires) in arb_case()) {
        let forward = marginal_prob(prob.view(), num_wires, Some(&wires)).unwrap();
        let reversed_wires: Vec<usize> = wires.iter().rev().copied().collect();
        let backward = marginal_prob(prob.view(), num_wires, Some(&reversed_wires)).unwrap();

        let k = wires.len();
        for index in 0..(1usize << k) {
            let mut mirrored = 0usize;
            for bit in 0..k {
                mirrored = (mirrored << 1) | ((index >> bit) & 1);
            }
            prop_assert!((forward[index] - backward[mirrored]).abs() < TOL);
        }
    }

    /// Binary expansion followed by mixed-radix reinterpretation recovers
    /// the basis-state index.
    #[test]
    fn states_to_binary_round_trips(num_wires in 1usize..=6, seed in 0usize..64) {
        let state = seed % (1 << num_wires);
        let bits = states_to_binary(&[state], num_wires);
        let recovered = ravel_index(bits.row(0).iter().copied());
        prop_assert_eq!(recovered, state);
    }
}
