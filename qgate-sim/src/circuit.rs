//! Circuit container and builder

use qgate_core::{Gate, GateDescriptor, GateError, Result, MAX_QUBITS};
use qgate_state::Amplitude;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a circuit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    /// Replace the running state with these amplitudes
    Initialize(Vec<Amplitude>),
    /// Apply a gate to the running state
    Gate(Gate),
}

/// Ordered instructions on a fixed number of qubits
///
/// Builder methods check qubit indices when the instruction is added, so a
/// circuit built through them only fails at run time if its state does.
///
/// # Example
/// ```
/// use qgate_sim::Circuit;
/// use std::f64::consts::PI;
///
/// let mut circuit = Circuit::new(2);
/// circuit.x(0).unwrap().rx(PI / 2.0, 1).unwrap().crx(PI, 0, 1).unwrap();
/// assert_eq!(circuit.len(), 3);
/// assert!(circuit.cx(1, 1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    num_qubits: usize,
    instructions: Vec<Instruction>,
}

impl Circuit {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            instructions: Vec::new(),
        }
    }

    /// Build a circuit from descriptors, converting and checking each one
    ///
    /// # Errors
    /// Returns the first conversion or validation error encountered.
    pub fn from_descriptors<I>(num_qubits: usize, descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = GateDescriptor>,
    {
        let mut circuit = Self::new(num_qubits);
        for descriptor in descriptors {
            circuit.push(Gate::try_from(descriptor)?)?;
        }
        Ok(circuit)
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Gates in order, skipping initializations
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.instructions.iter().filter_map(|inst| match inst {
            Instruction::Gate(gate) => Some(gate),
            Instruction::Initialize(_) => None,
        })
    }

    /// Append a gate after checking it against this circuit's qubits
    pub fn push(&mut self, gate: Gate) -> Result<&mut Self> {
        gate.validate(self.num_qubits)?;
        self.instructions.push(Instruction::Gate(gate));
        Ok(self)
    }

    /// Replace the running state with `amplitudes` at this point
    ///
    /// # Errors
    /// Returns [`GateError::DimensionMismatch`] unless there are exactly
    /// `2^num_qubits` amplitudes.
    pub fn initialize(&mut self, amplitudes: Vec<Amplitude>) -> Result<&mut Self> {
        if self.num_qubits > MAX_QUBITS {
            return Err(GateError::TooManyQubits {
                num_qubits: self.num_qubits,
                max: MAX_QUBITS,
            });
        }

        let expected = 1usize << self.num_qubits;
        if amplitudes.len() != expected {
            return Err(GateError::DimensionMismatch {
                expected,
                actual: amplitudes.len(),
            });
        }

        self.instructions.push(Instruction::Initialize(amplitudes));
        Ok(self)
    }

    pub fn x(&mut self, target: usize) -> Result<&mut Self> {
        self.push(Gate::x(target))
    }

    pub fn rx(&mut self, theta: f64, target: usize) -> Result<&mut Self> {
        self.push(Gate::rx(theta, target))
    }

    pub fn h(&mut self, target: usize) -> Result<&mut Self> {
        self.push(Gate::h(target))
    }

    pub fn cx(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.push(Gate::cx(control, target))
    }

    pub fn crx(
        &mut self,
        theta: f64,
        control: usize,
        target: usize,
    ) -> Result<&mut Self> {
        self.push(Gate::crx(theta, control, target))
    }

    /// Measurement placeholder; executes as a no-op
    pub fn measure(&mut self, target: usize) -> Result<&mut Self> {
        self.push(Gate::measure(target))
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "circuit on {} qubits", self.num_qubits)?;
        for inst in &self.instructions {
            match inst {
                Instruction::Gate(gate) => writeln!(f, "  {}", gate)?,
                Instruction::Initialize(amps) => writeln!(f, "  INIT [{} amplitudes]", amps.len())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qgate_core::GateKind;

    #[test]
    fn test_builder_chains() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap().cx(0, 1).unwrap().measure(1).unwrap();

        let names: Vec<_> = circuit.gates().map(|g| g.name()).collect();
        assert_eq!(names, vec!["H", "CX", "M"]);
    }

    #[test]
    fn test_builder_rejects_bad_qubits() {
        let mut circuit = Circuit::new(2);
        assert_eq!(circuit.x(2).unwrap_err(), GateError::out_of_bounds(2, 2));
        assert!(matches!(circuit.crx(1.0, 0, 0), Err(GateError::ControlIsTarget { .. })));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_initialize_checks_length() {
        let mut circuit = Circuit::new(1);
        let err = circuit.initialize(vec![Amplitude::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(
            err,
            GateError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );

        circuit
            .initialize(vec![Amplitude::new(0.0, 0.0), Amplitude::new(1.0, 0.0)])
            .unwrap();
        assert_eq!(circuit.len(), 1);
        assert_eq!(circuit.gates().count(), 0);
    }

    #[test]
    fn test_from_descriptors() {
        let descriptors = vec![
            GateDescriptor::new(GateKind::H, 0),
            GateDescriptor::new(GateKind::Cx, 1).with_control(0),
        ];
        let circuit = Circuit::from_descriptors(2, descriptors).unwrap();
        assert_eq!(circuit.gates().copied().collect::<Vec<_>>(), vec![Gate::h(0), Gate::cx(0, 1)]);

        let missing = vec![GateDescriptor::new(GateKind::Rx, 0)];
        assert_eq!(
            Circuit::from_descriptors(1, missing).unwrap_err(),
            GateError::MissingAngle { gate: "RX" }
        );
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap().cx(0, 1).unwrap();
        assert_eq!(circuit.to_string(), "circuit on 2 qubits\n  H q0\n  CX q0, q1\n");
    }
}
