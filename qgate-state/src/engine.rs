//! Gate application engine
//!
//! [`GateEngine`] is the entry point used by circuit executors. It checks
//! the amplitude count against the qubit count, checks the gate's qubits,
//! copies the input and runs the matching kernel on the copy. The caller's
//! slice is never written to, so earlier states stay valid and independent
//! callers need no coordination.

use crate::config::EngineConfig;
use crate::kernels;
use crate::Amplitude;
use qgate_core::{Gate, GateDescriptor, GateError, Result, MAX_QUBITS};
use tracing::{debug, trace};

/// Stateless gate application engine
///
/// # Example
/// ```
/// use qgate_core::Gate;
/// use qgate_state::{Amplitude, GateEngine};
///
/// let engine = GateEngine::default();
/// let ket0 = vec![Amplitude::new(1.0, 0.0), Amplitude::new(0.0, 0.0)];
///
/// let plus = engine.apply(&ket0, &Gate::h(0), 1).unwrap();
/// assert!((plus[1].re - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// assert_eq!(ket0[0], Amplitude::new(1.0, 0.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GateEngine {
    config: EngineConfig,
}

impl GateEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply `gate` to an `num_qubits`-qubit state and return the new state
    ///
    /// # Errors
    /// - [`GateError::TooManyQubits`] if `num_qubits` exceeds [`MAX_QUBITS`]
    /// - [`GateError::DimensionMismatch`] if `amplitudes.len() != 2^num_qubits`
    /// - [`GateError::QubitOutOfBounds`] / [`GateError::ControlIsTarget`] from
    ///   [`Gate::validate`]
    pub fn apply(
        &self,
        amplitudes: &[Amplitude],
        gate: &Gate,
        num_qubits: usize,
    ) -> Result<Vec<Amplitude>> {
        check_dimension(amplitudes.len(), num_qubits)?;
        gate.validate(num_qubits)?;

        let mut state = amplitudes.to_vec();
        let parallel = self.config.use_parallel_for(state.len());
        debug!(%gate, num_qubits, parallel, "applying gate");

        match *gate {
            Gate::X { target } => {
                kernels::apply_pauli_x(&mut state, num_qubits, target.index(), parallel)?
            },
            Gate::Rx { target, theta } => {
                kernels::apply_rotation_x(&mut state, num_qubits, target.index(), theta, parallel)?
            },
            Gate::H { target } => {
                kernels::apply_hadamard(&mut state, num_qubits, target.index(), parallel)?
            },
            Gate::Cx { control, target } => kernels::apply_cx(
                &mut state,
                num_qubits,
                control.index(),
                target.index(),
                parallel,
            )?,
            Gate::Crx {
                control,
                target,
                theta,
            } => kernels::apply_controlled_rotation_x(
                &mut state,
                num_qubits,
                control.index(),
                target.index(),
                theta,
                parallel,
            )?,
            Gate::M { target } => {
                trace!(%target, "measurement placeholder, state unchanged");
            },
        }

        Ok(state)
    }

    /// Apply a gate given in descriptor form
    ///
    /// # Errors
    /// In addition to the errors of [`GateEngine::apply`], returns
    /// [`GateError::MissingAngle`] for RX/CRX without an angle and
    /// [`GateError::MissingControl`] for CX/CRX without a control qubit.
    pub fn apply_descriptor(
        &self,
        amplitudes: &[Amplitude],
        descriptor: &GateDescriptor,
        num_qubits: usize,
    ) -> Result<Vec<Amplitude>> {
        let gate = Gate::try_from(descriptor.clone())?;
        self.apply(amplitudes, &gate, num_qubits)
    }

    pub fn apply_x(
        &self,
        amplitudes: &[Amplitude],
        target: usize,
        num_qubits: usize,
    ) -> Result<Vec<Amplitude>> {
        self.apply(amplitudes, &Gate::x(target), num_qubits)
    }

    pub fn apply_rx(
        &self,
        amplitudes: &[Amplitude],
        theta: f64,
        target: usize,
        num_qubits: usize,
    ) -> Result<Vec<Amplitude>> {
        self.apply(amplitudes, &Gate::rx(theta, target), num_qubits)
    }

    pub fn apply_h(
        &self,
        amplitudes: &[Amplitude],
        target: usize,
        num_qubits: usize,
    ) -> Result<Vec<Amplitude>> {
        self.apply(amplitudes, &Gate::h(target), num_qubits)
    }

    pub fn apply_cx(
        &self,
        amplitudes: &[Amplitude],
        control: usize,
        target: usize,
        num_qubits: usize,
    ) -> Result<Vec<Amplitude>> {
        self.apply(amplitudes, &Gate::cx(control, target), num_qubits)
    }

    pub fn apply_crx(
        &self,
        amplitudes: &[Amplitude],
        theta: f64,
        control: usize,
        target: usize,
        num_qubits: usize,
    ) -> Result<Vec<Amplitude>> {
        self.apply(amplitudes, &Gate::crx(theta, control, target), num_qubits)
    }

    /// Measurement placeholder: returns a copy of the input
    pub fn apply_measure(
        &self,
        amplitudes: &[Amplitude],
        target: usize,
        num_qubits: usize,
    ) -> Result<Vec<Amplitude>> {
        self.apply(amplitudes, &Gate::measure(target), num_qubits)
    }
}

/// Check that `len` amplitudes describe an `num_qubits`-qubit state
pub(crate) fn check_dimension(len: usize, num_qubits: usize) -> Result<()> {
    if num_qubits > MAX_QUBITS {
        return Err(GateError::TooManyQubits {
            num_qubits,
            max: MAX_QUBITS,
        });
    }

    let expected = 1usize << num_qubits;
    if len != expected {
        return Err(GateError::DimensionMismatch {
            expected,
            actual: len,
        });
    }

    Ok(())
}
