//! Measurement result containers.
//!
//! One circuit execution produces one result per observable, and the
//! results are not all the same shape: expectation values and variances
//! are scalars, probability vectors have length `2^k`, and raw samples
//! have one entry per shot. [`Measurements`] keeps them in observable
//! order as tagged values; [`Measurements::to_array`] recovers a flat
//! numeric array when every entry is a scalar.

use ndarray::Array1;

/// One per-observable statistic.
#[derive(Debug, Clone, PartialEq)]
pub enum Statistic {
    /// Expectation value.
    Expectation(f64),
    /// Variance.
    Variance(f64),
    /// Per-shot eigenvalue samples.
    Samples(Array1<f64>),
    /// (Marginal) probability vector over the observable's wires.
    Probabilities(Array1<f64>),
}

impl Statistic {
    /// The scalar value, if this statistic is one.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Statistic::Expectation(value) | Statistic::Variance(value) => Some(*value),
            Statistic::Samples(_) | Statistic::Probabilities(_) => None,
        }
    }

    /// Whether this statistic is a raw sample vector.
    pub fn is_sampled(&self) -> bool {
        matches!(self, Statistic::Samples(_))
    }
}

/// Ordered per-observable results of one execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements(Vec<Statistic>);

impl Measurements {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statistic.
    pub fn push(&mut self, statistic: Statistic) {
        self.0.push(statistic);
    }

    /// Number of statistics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the result set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Statistic at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Statistic> {
        self.0.get(index)
    }

    /// Iterate over the statistics in observable order.
    pub fn iter(&self) -> impl Iterator<Item = &Statistic> {
        self.0.iter()
    }

    /// Whether sampled and non-sampled results are mixed.
    pub fn is_mixed(&self) -> bool {
        let sampled = self.0.iter().filter(|s| s.is_sampled()).count();
        sampled > 0 && sampled < self.0.len()
    }

    /// Flatten to a numeric array when every statistic is a scalar.
    ///
    /// Returns `None` as soon as any entry carries a vector; callers that
    /// mix shapes iterate the tagged values instead.
    pub fn to_array(&self) -> Option<Array1<f64>> {
        self.0
            .iter()
            .map(Statistic::as_scalar)
            .collect::<Option<Vec<f64>>>()
            .map(Array1::from_vec)
    }
}

impl IntoIterator for Measurements {
    type Item = Statistic;
    type IntoIter = std::vec::IntoIter<Statistic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_scalar_results_flatten() {
        let mut results = Measurements::new();
        results.push(Statistic::Expectation(0.5));
        results.push(Statistic::Variance(0.75));
        assert!(!results.is_mixed());
        assert_eq!(results.to_array().unwrap(), array![0.5, 0.75]);
    }

    #[test]
    fn test_mixed_results_do_not_flatten() {
        let mut results = Measurements::new();
        results.push(Statistic::Expectation(1.0));
        results.push(Statistic::Samples(array![1.0, -1.0]));
        assert!(results.is_mixed());
        assert!(results.to_array().is_none());
    }

    #[test]
    fn test_all_sampled_is_not_mixed() {
        let mut results = Measurements::new();
        results.push(Statistic::Samples(array![1.0]));
        results.push(Statistic::Samples(array![-1.0]));
        assert!(!results.is_mixed());
    }
}
