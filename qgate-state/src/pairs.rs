//! Amplitude index pairing
//!
//! Every gate in this crate combines amplitudes two at a time. The two
//! indices of a pair differ only in the target qubit's bit: `pos1` has it
//! clear and `pos2 = pos1 + 2^target` has it set. Controlled gates restrict
//! the pairs to the subspace where the control bit is set.

use qgate_core::{GateError, QubitId, Result, MAX_QUBITS};

/// Pairs `(pos1, pos2)` of indices differing only in the target bit
///
/// For target `t` on `n` qubits the index space is walked as blocks of
/// `2^(t+1)` indices. The first `2^t` indices of each block have the target
/// bit clear and are paired with the index `2^t` further on. Iteration order
/// is offset-within-block first, then block.
///
/// # Example
/// ```
/// use qgate_state::TargetPairs;
///
/// let pairs: Vec<_> = TargetPairs::try_new(3, 1).unwrap().collect();
/// assert_eq!(pairs, vec![(0, 2), (4, 6), (1, 3), (5, 7)]);
/// assert!(TargetPairs::try_new(2, 5).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct TargetPairs {
    block_size: usize,
    block_stride: usize,
    outer_count: usize,
    i: usize,
    j: usize,
}

impl TargetPairs {
    /// Enumerate the pairs for `target` in an `num_qubits`-qubit state
    ///
    /// # Errors
    /// [`GateError::TooManyQubits`] or [`GateError::QubitOutOfBounds`]
    pub fn try_new(num_qubits: usize, target: usize) -> Result<Self> {
        check_target(num_qubits, target)?;
        Ok(Self::new(num_qubits, target))
    }

    /// Unchecked constructor, callers have run [`check_target`]
    pub(crate) fn new(num_qubits: usize, target: usize) -> Self {
        debug_assert!(target < num_qubits, "target {target} outside {num_qubits} qubits");

        Self {
            block_size: 1 << target,
            block_stride: 1 << (target + 1),
            outer_count: 1 << (num_qubits - target - 1),
            i: 0,
            j: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.i >= self.block_size {
            return 0;
        }
        (self.block_size - self.i) * self.outer_count - self.j
    }
}

impl Iterator for TargetPairs {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.block_size {
            return None;
        }

        let pos1 = self.i + self.j * self.block_stride;
        let pos2 = pos1 + self.block_size;

        self.j += 1;
        if self.j == self.outer_count {
            self.j = 0;
            self.i += 1;
        }

        Some((pos1, pos2))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for TargetPairs {}

/// Pairs `(pos1, pos2)` restricted to indices whose control bit is set
///
/// `pos1` has the control bit set and the target bit clear, `pos2` is
/// `pos1` with the target bit set. The indices are generated directly by
/// spreading a counter over the `n - 2` free bit positions, so no index is
/// visited only to be rejected. Works for either ordering of control and
/// target.
///
/// # Example
/// ```
/// use qgate_state::ControlledPairs;
///
/// // Control q1, target q0 on two qubits: only |10⟩ <-> |11⟩
/// let pairs: Vec<_> = ControlledPairs::try_new(2, 1, 0).unwrap().collect();
/// assert_eq!(pairs, vec![(2, 3)]);
/// assert!(ControlledPairs::try_new(2, 1, 1).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ControlledPairs {
    low: usize,
    high: usize,
    control_mask: usize,
    target_mask: usize,
    next: usize,
    count: usize,
}

impl ControlledPairs {
    /// Enumerate the control-active pairs for the given qubits
    ///
    /// # Errors
    /// [`GateError::TooManyQubits`], [`GateError::QubitOutOfBounds`] or
    /// [`GateError::ControlIsTarget`]
    pub fn try_new(num_qubits: usize, control: usize, target: usize) -> Result<Self> {
        check_controlled(num_qubits, control, target)?;
        Ok(Self::new(num_qubits, control, target))
    }

    /// Unchecked constructor, callers have run [`check_controlled`]
    pub(crate) fn new(num_qubits: usize, control: usize, target: usize) -> Self {
        debug_assert!(control < num_qubits && target < num_qubits);
        debug_assert_ne!(control, target);

        Self {
            low: control.min(target),
            high: control.max(target),
            control_mask: 1 << control,
            target_mask: 1 << target,
            next: 0,
            count: 1 << (num_qubits - 2),
        }
    }

    /// Spread `k` over all bit positions except `low` and `high`
    #[inline]
    fn spread(&self, k: usize) -> usize {
        let with_low = insert_zero_bit(k, self.low);
        insert_zero_bit(with_low, self.high)
    }
}

/// Check that `target` is a qubit of an `num_qubits`-qubit state
pub(crate) fn check_target(num_qubits: usize, target: usize) -> Result<()> {
    if num_qubits > MAX_QUBITS {
        return Err(GateError::TooManyQubits {
            num_qubits,
            max: MAX_QUBITS,
        });
    }
    if target >= num_qubits {
        return Err(GateError::out_of_bounds(target, num_qubits));
    }
    Ok(())
}

/// Check a control/target pair: both in range and distinct
pub(crate) fn check_controlled(num_qubits: usize, control: usize, target: usize) -> Result<()> {
    check_target(num_qubits, target)?;
    if control >= num_qubits {
        return Err(GateError::out_of_bounds(control, num_qubits));
    }
    if control == target {
        return Err(GateError::ControlIsTarget {
            qubit: QubitId::new(control),
        });
    }
    Ok(())
}

/// Insert a zero at bit position `bit`, shifting higher bits up by one
#[inline]
fn insert_zero_bit(value: usize, bit: usize) -> usize {
    let low_mask = (1 << bit) - 1;
    ((value & !low_mask) << 1) | (value & low_mask)
}

impl Iterator for ControlledPairs {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }

        let pos1 = self.spread(self.next) | self.control_mask;
        self.next += 1;

        Some((pos1, pos1 | self.target_mask))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ControlledPairs {}
