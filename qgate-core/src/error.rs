//! Error types for gate validation and application

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while validating or applying a gate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    /// Rotation-family gate supplied without an angle
    #[error("Gate '{gate}' requires a rotation angle")]
    MissingAngle { gate: &'static str },

    /// Controlled gate supplied without a control qubit
    #[error("Gate '{gate}' requires a control qubit")]
    MissingControl { gate: &'static str },

    /// Qubit index outside the state
    #[error("Invalid qubit index {qubit} for {num_qubits}-qubit state")]
    QubitOutOfBounds { qubit: QubitId, num_qubits: usize },

    /// Control and target name the same qubit
    #[error("Control and target must be different, both are {qubit}")]
    ControlIsTarget { qubit: QubitId },

    /// Amplitude count does not match the qubit count
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Amplitude count is not a power of two
    #[error("Invalid state dimension {dimension}, expected power of 2")]
    InvalidDimension { dimension: usize },

    /// Basis state index outside the state
    #[error("Basis index {index} out of range for dimension {dimension}")]
    BasisIndexOutOfRange { index: usize, dimension: usize },

    /// Qubit count above the supported limit
    #[error("{num_qubits} qubits requested, at most {max} are supported")]
    TooManyQubits { num_qubits: usize, max: usize },
}

impl GateError {
    /// Create an out-of-bounds qubit error
    pub fn out_of_bounds(qubit: usize, num_qubits: usize) -> Self {
        Self::QubitOutOfBounds {
            qubit: QubitId::new(qubit),
            num_qubits,
        }
    }
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = GateError::out_of_bounds(5, 3);
        let msg = err.to_string();
        assert!(msg.contains("q5"));
        assert!(msg.contains("3-qubit"));
    }

    #[test]
    fn test_missing_angle_message() {
        let err = GateError::MissingAngle { gate: "RX" };
        assert_eq!(err.to_string(), "Gate 'RX' requires a rotation angle");
    }

    #[test]
    fn test_basis_index_message() {
        let err = GateError::BasisIndexOutOfRange {
            index: usize::MAX,
            dimension: 4,
        };
        assert_eq!(
            err.to_string(),
            format!("Basis index {} out of range for dimension 4", usize::MAX)
        );
    }
}
