//! Simulation result types

use qgate_state::{Amplitude, StateVector};
use std::time::Duration;

/// Result of running a circuit
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Final state after every instruction
    pub state: StateVector,

    /// Number of unitary gates applied
    pub gates_applied: usize,

    /// Number of measurement placeholders passed over
    pub measurements_skipped: usize,

    /// Wall-clock time spent executing
    pub elapsed: Duration,
}

impl SimulationResult {
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    pub fn amplitudes(&self) -> &[Amplitude] {
        self.state.amplitudes()
    }

    /// Probability of every basis state, in index order
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    pub fn into_state(self) -> StateVector {
        self.state
    }
}
