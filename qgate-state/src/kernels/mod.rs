//! In-place gate kernels
//!
//! Each kernel checks its arguments, then walks the index pairs of
//! [`crate::pairs`] and hands both amplitudes of a pair to a combine
//! function. A bad qubit or amplitude count is reported as a [`GateError`]
//! before any amplitude is touched.
//!
//! Pairs are independent of one another, so above the configured threshold
//! the buffer is processed with rayon. The buffer is cut into blocks of
//! `2^(target+1)` amplitudes whose first half holds the `pos1` amplitudes and
//! second half the matching `pos2` amplitudes. The two halves are zipped in
//! parallel as well, so a high target still spreads over every thread.
//! Controlled kernels only cut out the runs where the control bit is set.
//!
//! [`GateError`]: qgate_core::GateError

pub mod controlled;
pub mod single_qubit;

pub use controlled::{apply_controlled_rotation_x, apply_cx};
pub use single_qubit::{apply_hadamard, apply_pauli_x, apply_rotation_x};

use crate::engine::check_dimension;
use crate::pairs::{check_controlled, check_target, ControlledPairs, TargetPairs};
use crate::Amplitude;
use qgate_core::Result;
use rayon::prelude::*;
use std::f64::consts::FRAC_1_SQRT_2;

/// Smallest number of pairs worth a rayon task of its own
const MIN_PAIRS_PER_TASK: usize = 1 << 10;

/// Apply `op` to every target pair of `state`
///
/// # Errors
/// [`GateError::DimensionMismatch`] if `state.len() != 2^num_qubits`,
/// [`GateError::QubitOutOfBounds`] if `target >= num_qubits`
///
/// [`GateError::DimensionMismatch`]: qgate_core::GateError::DimensionMismatch
/// [`GateError::QubitOutOfBounds`]: qgate_core::GateError::QubitOutOfBounds
pub fn apply_pair_op<F>(
    state: &mut [Amplitude],
    num_qubits: usize,
    target: usize,
    parallel: bool,
    op: F,
) -> Result<()>
where
    F: Fn(&mut Amplitude, &mut Amplitude) + Sync,
{
    check_dimension(state.len(), num_qubits)?;
    check_target(num_qubits, target)?;

    if parallel {
        par_target_pairs(state, 1 << target, &op);
    } else {
        for (pos1, pos2) in TargetPairs::new(num_qubits, target) {
            let (a, b) = pair_mut(state, pos1, pos2);
            op(a, b);
        }
    }

    Ok(())
}

/// Apply `op` to every target pair whose control bit is set
///
/// # Errors
/// As [`apply_pair_op`] for either qubit, plus
/// [`GateError::ControlIsTarget`] when both name the same qubit
///
/// [`GateError::ControlIsTarget`]: qgate_core::GateError::ControlIsTarget
pub fn apply_controlled_pair_op<F>(
    state: &mut [Amplitude],
    num_qubits: usize,
    control: usize,
    target: usize,
    parallel: bool,
    op: F,
) -> Result<()>
where
    F: Fn(&mut Amplitude, &mut Amplitude) + Sync,
{
    check_dimension(state.len(), num_qubits)?;
    check_controlled(num_qubits, control, target)?;

    if !parallel {
        for (pos1, pos2) in ControlledPairs::new(num_qubits, control, target) {
            let (a, b) = pair_mut(state, pos1, pos2);
            op(a, b);
        }
        return Ok(());
    }

    let stride = 1 << target;
    let control_stride = 1 << control;

    if control > target {
        // Upper half of every 2^(control+1) run has the control bit set
        state
            .par_chunks_mut(control_stride * 2)
            .with_min_len(min_len(control_stride / 2))
            .for_each(|run| par_target_pairs(&mut run[control_stride..], stride, &op));
    } else {
        // Control bit lives inside each half block
        state
            .par_chunks_mut(stride * 2)
            .with_min_len(min_len(stride / 2))
            .for_each(|block| {
                let (low, high) = block.split_at_mut(stride);
                low.par_chunks_mut(control_stride * 2)
                    .zip(high.par_chunks_mut(control_stride * 2))
                    .with_min_len(min_len(control_stride))
                    .for_each(|(low_run, high_run)| {
                        low_run[control_stride..]
                            .iter_mut()
                            .zip(&mut high_run[control_stride..])
                            .for_each(|(a, b)| op(a, b));
                    });
            });
    }

    Ok(())
}

/// Parallel walk over all target pairs of `state`, `stride = 2^target`
fn par_target_pairs<F>(state: &mut [Amplitude], stride: usize, op: &F)
where
    F: Fn(&mut Amplitude, &mut Amplitude) + Sync,
{
    state
        .par_chunks_mut(stride * 2)
        .with_min_len(min_len(stride))
        .for_each(|block| {
            let (low, high) = block.split_at_mut(stride);
            low.par_iter_mut()
                .zip(high.par_iter_mut())
                .with_min_len(MIN_PAIRS_PER_TASK)
                .for_each(|(a, b)| op(a, b));
        });
}

/// Items per task when each item carries `pairs_per_item` pairs
#[inline]
fn min_len(pairs_per_item: usize) -> usize {
    (MIN_PAIRS_PER_TASK / pairs_per_item.max(1)).max(1)
}

/// Borrow two distinct amplitudes mutably, `pos1 < pos2`
#[inline]
fn pair_mut(state: &mut [Amplitude], pos1: usize, pos2: usize) -> (&mut Amplitude, &mut Amplitude) {
    debug_assert!(pos1 < pos2);
    let (low, high) = state.split_at_mut(pos2);
    (&mut low[pos1], &mut high[0])
}

/// Exchange the two amplitudes (X)
#[inline]
pub fn swap_pair(a: &mut Amplitude, b: &mut Amplitude) {
    std::mem::swap(a, b);
}

/// Hadamard on a pair: `(a + b)/√2`, `(a - b)/√2`
#[inline]
pub fn hadamard_pair(a: &mut Amplitude, b: &mut Amplitude) {
    let (a0, b0) = (*a, *b);
    *a = (a0 + b0) * FRAC_1_SQRT_2;
    *b = (a0 - b0) * FRAC_1_SQRT_2;
}

/// X-axis rotation `[[c, -i s], [-i s, c]]` with `c = cos(θ/2)`, `s = sin(θ/2)`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotationX {
    cos: f64,
    sin: f64,
}

impl RotationX {
    pub fn new(theta: f64) -> Self {
        let half = theta / 2.0;
        Self {
            cos: half.cos(),
            sin: half.sin(),
        }
    }

    /// Rotate one pair, both outputs computed from the pre-update values
    #[inline]
    pub fn apply(&self, a: &mut Amplitude, b: &mut Amplitude) {
        let (c, s) = (self.cos, self.sin);
        let (a0, b0) = (*a, *b);

        *a = Amplitude::new(c * a0.re + s * b0.im, c * a0.im - s * b0.re);
        *b = Amplitude::new(c * b0.re + s * a0.im, c * b0.im - s * a0.re);
    }
}
