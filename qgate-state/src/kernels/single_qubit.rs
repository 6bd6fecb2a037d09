//! Single-qubit gate kernels (X, RX, H)

use super::{apply_pair_op, hadamard_pair, swap_pair, RotationX};
use crate::Amplitude;
use qgate_core::Result;

/// Apply a Pauli-X gate: a pure permutation of the target pairs
///
/// # Errors
/// Returns an error if the state length or the target qubit does not fit
/// `num_qubits`.
pub fn apply_pauli_x(
    state: &mut [Amplitude],
    num_qubits: usize,
    target: usize,
    parallel: bool,
) -> Result<()> {
    apply_pair_op(state, num_qubits, target, parallel, swap_pair)
}

/// Apply an X-axis rotation by `theta` to the target qubit
pub fn apply_rotation_x(
    state: &mut [Amplitude],
    num_qubits: usize,
    target: usize,
    theta: f64,
    parallel: bool,
) -> Result<()> {
    let rotation = RotationX::new(theta);
    apply_pair_op(state, num_qubits, target, parallel, |a, b| rotation.apply(a, b))
}

/// Apply a Hadamard gate to the target qubit
pub fn apply_hadamard(
    state: &mut [Amplitude],
    num_qubits: usize,
    target: usize,
    parallel: bool,
) -> Result<()> {
    apply_pair_op(state, num_qubits, target, parallel, hadamard_pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qgate_core::GateError;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    fn zero() -> Amplitude {
        Amplitude::new(0.0, 0.0)
    }

    fn one() -> Amplitude {
        Amplitude::new(1.0, 0.0)
    }

    #[test]
    fn test_x_flips_ket_zero() {
        let mut state = vec![one(), zero()];
        apply_pauli_x(&mut state, 1, 0, false).unwrap();
        assert_eq!(state, vec![zero(), one()]);
    }

    #[test]
    fn test_x_on_higher_qubit() {
        // |01⟩ (q0 = 1) -> |11⟩ when flipping q1
        let mut state = vec![zero(), one(), zero(), zero()];
        apply_pauli_x(&mut state, 2, 1, false).unwrap();
        assert_eq!(state, vec![zero(), zero(), zero(), one()]);
    }

    #[test]
    fn test_hadamard_ket_zero() {
        let mut state = vec![one(), zero()];
        apply_hadamard(&mut state, 1, 0, false).unwrap();

        assert_relative_eq!(state[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(state[1].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(state[0].im, 0.0);
        assert_relative_eq!(state[1].im, 0.0);
    }

    #[test]
    fn test_hadamard_ket_one_has_negative_branch() {
        let mut state = vec![zero(), one()];
        apply_hadamard(&mut state, 1, 0, false).unwrap();

        assert_relative_eq!(state[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(state[1].re, -FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_rx_pi_is_x_up_to_phase() {
        // RX(π)|0⟩ = -i|1⟩
        let mut state = vec![one(), zero()];
        apply_rotation_x(&mut state, 1, 0, PI, false).unwrap();

        assert_relative_eq!(state[0].norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(state[1].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(state[1].im, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rx_half_pi() {
        let mut state = vec![one(), zero()];
        apply_rotation_x(&mut state, 1, 0, PI / 2.0, false).unwrap();

        assert_relative_eq!(state[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(state[1].im, -FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_target_is_an_error() {
        for parallel in [false, true] {
            let mut state = vec![one(), zero()];
            assert_eq!(
                apply_pauli_x(&mut state, 1, 3, parallel).unwrap_err(),
                GateError::out_of_bounds(3, 1)
            );
            assert_eq!(
                apply_hadamard(&mut state, 1, 1, parallel).unwrap_err(),
                GateError::out_of_bounds(1, 1)
            );
            assert!(apply_rotation_x(&mut state, 1, usize::MAX, 0.4, parallel).is_err());
            assert_eq!(state, vec![one(), zero()]);
        }
    }

    #[test]
    fn test_wrong_length_is_an_error() {
        let mut state = vec![one(), zero(), zero()];
        assert_eq!(
            apply_pauli_x(&mut state, 2, 0, true).unwrap_err(),
            GateError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        );
    }
}
