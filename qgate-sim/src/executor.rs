//! Circuit executor

use crate::circuit::{Circuit, Instruction};
use crate::config::ExecutionConfig;
use crate::error::{ExecutionError, Result};
use crate::result::SimulationResult;
use qgate_core::{Gate, GateError, MAX_QUBITS};
use qgate_state::{GateEngine, StateVector};
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Runs circuits by threading a state vector through the gate engine
///
/// Each gate produces a new state; the executor keeps only the latest one.
/// Measurement placeholders leave the state as it is and are counted
/// separately. The state is never renormalized.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: ExecutionConfig,
    engine: GateEngine,
}

impl Executor {
    pub fn new(config: ExecutionConfig) -> Self {
        let engine = GateEngine::new(config.engine.clone());
        Self { config, engine }
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    pub fn engine(&self) -> &GateEngine {
        &self.engine
    }

    /// Run `circuit` starting from |0...0⟩
    ///
    /// # Errors
    /// See [`Executor::run_from`].
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        let initial =
            StateVector::zero(circuit.num_qubits()).map_err(ExecutionError::InvalidInitialState)?;
        self.run_from(circuit, initial)
    }

    /// Run `circuit` starting from `initial`
    ///
    /// # Errors
    /// - [`ExecutionError::InvalidInitialState`] if `initial` or an
    ///   initialize instruction has the wrong number of qubits
    /// - [`ExecutionError::GateApplicationFailed`] if the engine rejects a gate
    /// - [`ExecutionError::ValidationFailed`] if validation is enabled and a
    ///   unitary gate changed the total probability
    #[instrument(skip_all, fields(num_qubits = circuit.num_qubits(), instructions = circuit.len()))]
    pub fn run_from(&self, circuit: &Circuit, initial: StateVector) -> Result<SimulationResult> {
        let num_qubits = circuit.num_qubits();
        if num_qubits > MAX_QUBITS {
            return Err(ExecutionError::InvalidInitialState(GateError::TooManyQubits {
                num_qubits,
                max: MAX_QUBITS,
            }));
        }
        if initial.num_qubits() != num_qubits {
            return Err(ExecutionError::InvalidInitialState(GateError::DimensionMismatch {
                expected: 1usize << num_qubits,
                actual: initial.dimension(),
            }));
        }

        let start = Instant::now();
        let mut state = initial;
        let mut gates_applied = 0;
        let mut measurements_skipped = 0;

        for (index, instruction) in circuit.instructions().iter().enumerate() {
            match instruction {
                Instruction::Initialize(amplitudes) => {
                    state = StateVector::from_amplitudes(num_qubits, amplitudes.clone())
                        .map_err(ExecutionError::InvalidInitialState)?;
                    debug!(index, "state re-initialized");
                },
                Instruction::Gate(gate) => {
                    let next = self.step(index, gate, &state)?;
                    if gate.is_unitary() {
                        gates_applied += 1;
                    } else {
                        measurements_skipped += 1;
                    }
                    state = next;
                },
            }
        }

        let elapsed = start.elapsed();
        debug!(gates_applied, measurements_skipped, ?elapsed, "circuit executed");

        Ok(SimulationResult {
            state,
            gates_applied,
            measurements_skipped,
            elapsed,
        })
    }

    /// Apply one gate and validate the result if configured
    fn step(&self, index: usize, gate: &Gate, state: &StateVector) -> Result<StateVector> {
        let next = state
            .apply(&self.engine, gate)
            .map_err(|source| ExecutionError::GateApplicationFailed {
                index,
                gate: *gate,
                source,
            })?;

        if self.config.validate_state && gate.is_unitary() {
            let before = state.norm_sqr();
            let after = next.norm_sqr();
            if (after - before).abs() > self.config.tolerance * before.max(1.0) {
                warn!(index, %gate, before, after, "total probability changed");
                return Err(ExecutionError::ValidationFailed {
                    index,
                    before,
                    after,
                });
            }
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qgate_state::Amplitude;

    #[test]
    fn test_empty_circuit_returns_initial_state() {
        let result = Executor::default().run(&Circuit::new(2)).unwrap();
        assert_eq!(result.state, StateVector::zero(2).unwrap());
        assert_eq!(result.gates_applied, 0);
    }

    #[test]
    fn test_counts_gates_and_measurements() {
        let mut circuit = Circuit::new(2);
        circuit.x(0).unwrap().cx(0, 1).unwrap().measure(0).unwrap().measure(1).unwrap();

        let result = Executor::default().run(&circuit).unwrap();
        assert_eq!(result.gates_applied, 2);
        assert_eq!(result.measurements_skipped, 2);
        assert_eq!(result.state, StateVector::basis(2, 0b11).unwrap());
    }

    #[test]
    fn test_initialize_replaces_state() {
        let mut circuit = Circuit::new(1);
        circuit
            .h(0)
            .unwrap()
            .initialize(vec![Amplitude::new(0.0, 0.0), Amplitude::new(1.0, 0.0)])
            .unwrap()
            .x(0)
            .unwrap();

        let result = Executor::default().run(&circuit).unwrap();
        assert_relative_eq!(result.probabilities()[0], 1.0);
    }

    #[test]
    fn test_run_from_rejects_wrong_size() {
        let circuit = Circuit::new(2);
        let err = Executor::default()
            .run_from(&circuit, StateVector::zero(1).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            ExecutionError::InvalidInitialState(GateError::DimensionMismatch {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn test_unnormalized_state_is_not_renormalized() {
        let mut circuit = Circuit::new(1);
        circuit.h(0).unwrap();
        let initial = StateVector::from_vec(vec![Amplitude::new(2.0, 0.0), Amplitude::new(0.0, 0.0)]).unwrap();

        let executor = Executor::new(ExecutionConfig::reliable());
        let result = executor.run_from(&circuit, initial).unwrap();
        assert_relative_eq!(result.state.norm_sqr(), 4.0, epsilon = 1e-12);
    }
}
