//! Controlled two-qubit gate kernels (CX, CRX)
//!
//! Only pairs whose control bit is set are touched; amplitudes with the
//! control bit clear are left exactly as they were.

use super::{apply_controlled_pair_op, swap_pair, RotationX};
use crate::Amplitude;
use qgate_core::Result;

/// Apply a controlled-X: swap target pairs where `control` is 1
///
/// # Errors
/// Returns an error for a bad state length, an out-of-range qubit, or a
/// control equal to the target.
pub fn apply_cx(
    state: &mut [Amplitude],
    num_qubits: usize,
    control: usize,
    target: usize,
    parallel: bool,
) -> Result<()> {
    apply_controlled_pair_op(state, num_qubits, control, target, parallel, swap_pair)
}

/// Apply a controlled X-axis rotation by `theta`
pub fn apply_controlled_rotation_x(
    state: &mut [Amplitude],
    num_qubits: usize,
    control: usize,
    target: usize,
    theta: f64,
    parallel: bool,
) -> Result<()> {
    let rotation = RotationX::new(theta);
    apply_controlled_pair_op(state, num_qubits, control, target, parallel, |a, b| {
        rotation.apply(a, b)
    })
}
