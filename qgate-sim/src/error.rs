//! Error types for circuit execution

use qgate_core::{Gate, GateError};
use thiserror::Error;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, ExecutionError>;

/// Errors that can occur while executing a circuit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutionError {
    /// The engine rejected a gate
    #[error("Gate application failed at instruction {index} ({gate}): {source}")]
    GateApplicationFailed {
        index: usize,
        gate: Gate,
        #[source]
        source: GateError,
    },

    /// Starting state or an initialize instruction does not fit the circuit
    #[error("Invalid initial state: {0}")]
    InvalidInitialState(#[source] GateError),

    /// Total probability drifted across a unitary gate
    #[error("State validation failed at instruction {index}: total probability {before} became {after}")]
    ValidationFailed { index: usize, before: f64, after: f64 },
}

impl ExecutionError {
    /// Index of the failing instruction, when there is one
    pub fn instruction_index(&self) -> Option<usize> {
        match self {
            ExecutionError::GateApplicationFailed { index, .. }
            | ExecutionError::ValidationFailed { index, .. } => Some(*index),
            ExecutionError::InvalidInitialState(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_gate_failure_keeps_source() {
        let err = ExecutionError::GateApplicationFailed {
            index: 3,
            gate: Gate::x(4),
            source: GateError::out_of_bounds(4, 2),
        };

        assert_eq!(err.instruction_index(), Some(3));
        assert!(err.to_string().contains("X q4"));
        assert!(err.source().is_some());
    }
}
