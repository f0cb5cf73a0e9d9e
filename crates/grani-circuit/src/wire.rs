//! Wire identifiers and ordered wire collections.
//!
//! A wire is one subsystem of the quantum state. Basis states are read
//! big-endian across wires: wire 0 is the most significant bit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a wire within a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WireId(pub usize);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl From<usize> for WireId {
    fn from(id: usize) -> Self {
        WireId(id)
    }
}

impl From<u32> for WireId {
    fn from(id: u32) -> Self {
        WireId(id as usize)
    }
}

/// An ordered list of distinct wires.
///
/// Order is significant: a marginal probability over `[2, 0]` is the
/// permutation of the marginal over `[0, 2]`, not the same vector.
/// Duplicates are removed on construction, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wires(Vec<WireId>);

impl Wires {
    /// Create a wire list from anything yielding wire identifiers.
    pub fn new<I, W>(wires: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WireId>,
    {
        let mut seen = Vec::new();
        for wire in wires {
            let wire = wire.into();
            if !seen.contains(&wire) {
                seen.push(wire);
            }
        }
        Wires(seen)
    }

    /// Create a single-wire list.
    pub fn single(wire: impl Into<WireId>) -> Self {
        Wires(vec![wire.into()])
    }

    /// Create the consecutive wire list `[0, 1, .., n-1]`.
    pub fn range(n: usize) -> Self {
        Wires((0..n).map(WireId).collect())
    }

    /// Number of wires.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the wires in order.
    pub fn iter(&self) -> impl Iterator<Item = WireId> + '_ {
        self.0.iter().copied()
    }

    /// Whether the list contains the given wire.
    pub fn contains(&self, wire: impl Into<WireId>) -> bool {
        self.0.contains(&wire.into())
    }

    /// First wire in the list, if any.
    pub fn first(&self) -> Option<WireId> {
        self.0.first().copied()
    }

    /// The raw indices, in order.
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|w| w.0).collect()
    }
}

impl From<&[usize]> for Wires {
    fn from(wires: &[usize]) -> Self {
        Wires::new(wires.iter().copied())
    }
}

impl<const N: usize> From<[usize; N]> for Wires {
    fn from(wires: [usize; N]) -> Self {
        Wires::new(wires)
    }
}

impl From<usize> for Wires {
    fn from(wire: usize) -> Self {
        Wires::single(wire)
    }
}

impl fmt::Display for Wires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, wire) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{wire}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wires_dedup_keeps_order() {
        let wires = Wires::new([2usize, 0, 2, 1]);
        assert_eq!(wires.indices(), vec![2, 0, 1]);
    }

    #[test]
    fn test_wires_range() {
        let wires = Wires::range(3);
        assert_eq!(wires.indices(), vec![0, 1, 2]);
        assert!(wires.contains(2usize));
        assert!(!wires.contains(3usize));
    }

    #[test]
    fn test_wire_display() {
        assert_eq!(WireId(4).to_string(), "w4");
        assert_eq!(Wires::new([2usize, 0]).to_string(), "[w2, w0]");
    }
}
