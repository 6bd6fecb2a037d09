//! Qubit addressing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for a qubit
///
/// Qubit `k` corresponds to bit `k` (least significant first) of a basis
/// state index.
///
/// # Example
/// ```
/// use qgate_core::QubitId;
///
/// let q2 = QubitId::new(2);
/// assert_eq!(q2.mask(), 0b100);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Bit mask selecting this qubit in a basis state index
    #[inline]
    pub const fn mask(&self) -> usize {
        1 << self.0
    }

    /// Value of this qubit in the given basis state
    #[inline]
    pub const fn is_set_in(&self, basis_index: usize) -> bool {
        basis_index & self.mask() != 0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_creation() {
        let q = QubitId::new(5);
        assert_eq!(q.index(), 5);
        assert_eq!(q.mask(), 32);
    }

    #[test]
    fn test_bit_lookup() {
        let q1 = QubitId::new(1);
        assert!(!q1.is_set_in(0b01));
        assert!(q1.is_set_in(0b10));
        assert!(q1.is_set_in(0b11));
    }

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId::new(3)), "q3");
    }

    #[test]
    fn test_qubit_conversions() {
        let q: QubitId = 7usize.into();
        let idx: usize = q.into();
        assert_eq!(idx, 7);
    }
}
