//! Gate model and its serializable descriptor form
//!
//! Circuits arrive as [`GateDescriptor`]s, a flat record with optional
//! control and angle fields. Before anything touches a state vector the
//! descriptor is converted into a [`Gate`], whose variants carry exactly
//! the fields their kind needs. A rotation without an angle or a
//! controlled gate without a control is rejected at that point instead of
//! producing an empty result or silently controlling on qubit 0.

use crate::{GateError, QubitId, Result, MAX_QUBITS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a gate
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Pauli-X (bit flip)
    #[serde(rename = "X")]
    X,
    /// Controlled-X
    #[serde(rename = "CX")]
    Cx,
    /// X-axis rotation
    #[serde(rename = "RX")]
    Rx,
    /// Controlled X-axis rotation
    #[serde(rename = "CRX")]
    Crx,
    /// Hadamard
    #[serde(rename = "H")]
    H,
    /// Measurement placeholder
    #[serde(rename = "M")]
    M,
}

impl GateKind {
    /// Mnemonic used in circuit descriptions
    pub const fn name(self) -> &'static str {
        match self {
            GateKind::X => "X",
            GateKind::Cx => "CX",
            GateKind::Rx => "RX",
            GateKind::Crx => "CRX",
            GateKind::H => "H",
            GateKind::M => "M",
        }
    }

    /// Whether gates of this kind need a control qubit
    pub const fn is_controlled(self) -> bool {
        matches!(self, GateKind::Cx | GateKind::Crx)
    }

    /// Whether gates of this kind need a rotation angle
    pub const fn is_rotation(self) -> bool {
        matches!(self, GateKind::Rx | GateKind::Crx)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Untyped gate record as it appears in circuit descriptions
///
/// # Example
/// ```
/// use qgate_core::{GateDescriptor, GateKind};
///
/// let rx: GateDescriptor = serde_json::from_str(r#"{"kind":"RX","target":0,"theta":1.5}"#).unwrap();
/// assert_eq!(rx.kind, GateKind::Rx);
/// assert_eq!(rx.theta, Some(1.5));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GateDescriptor {
    pub kind: GateKind,
    pub target: QubitId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<QubitId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
}

impl GateDescriptor {
    /// Descriptor with only a kind and target
    pub fn new(kind: GateKind, target: usize) -> Self {
        Self {
            kind,
            target: QubitId::new(target),
            control: None,
            theta: None,
        }
    }

    /// Set the control qubit
    pub fn with_control(mut self, control: usize) -> Self {
        self.control = Some(QubitId::new(control));
        self
    }

    /// Set the rotation angle
    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = Some(theta);
        self
    }
}

/// A gate ready to be applied to a state vector
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GateDescriptor", into = "GateDescriptor")]
pub enum Gate {
    /// Swap the amplitudes of every pair differing in `target`
    X { target: QubitId },
    /// Rotate every `target` pair about the X axis by `theta`
    Rx { target: QubitId, theta: f64 },
    /// Hadamard on `target`
    H { target: QubitId },
    /// Measurement placeholder, leaves the state untouched
    M { target: QubitId },
    /// X on `target` where `control` is 1
    Cx { control: QubitId, target: QubitId },
    /// RX on `target` where `control` is 1
    Crx {
        control: QubitId,
        target: QubitId,
        theta: f64,
    },
}

impl Gate {
    pub fn x(target: usize) -> Self {
        Gate::X {
            target: QubitId::new(target),
        }
    }

    pub fn rx(theta: f64, target: usize) -> Self {
        Gate::Rx {
            target: QubitId::new(target),
            theta,
        }
    }

    pub fn h(target: usize) -> Self {
        Gate::H {
            target: QubitId::new(target),
        }
    }

    pub fn measure(target: usize) -> Self {
        Gate::M {
            target: QubitId::new(target),
        }
    }

    pub fn cx(control: usize, target: usize) -> Self {
        Gate::Cx {
            control: QubitId::new(control),
            target: QubitId::new(target),
        }
    }

    pub fn crx(theta: f64, control: usize, target: usize) -> Self {
        Gate::Crx {
            control: QubitId::new(control),
            target: QubitId::new(target),
            theta,
        }
    }

    /// Kind tag of this gate
    pub const fn kind(&self) -> GateKind {
        match self {
            Gate::X { .. } => GateKind::X,
            Gate::Rx { .. } => GateKind::Rx,
            Gate::H { .. } => GateKind::H,
            Gate::M { .. } => GateKind::M,
            Gate::Cx { .. } => GateKind::Cx,
            Gate::Crx { .. } => GateKind::Crx,
        }
    }

    /// Mnemonic of this gate (e.g. "CRX")
    pub const fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Qubit the gate acts on directly
    pub const fn target(&self) -> QubitId {
        match *self {
            Gate::X { target }
            | Gate::Rx { target, .. }
            | Gate::H { target }
            | Gate::M { target }
            | Gate::Cx { target, .. }
            | Gate::Crx { target, .. } => target,
        }
    }

    /// Control qubit, for controlled gates
    pub const fn control(&self) -> Option<QubitId> {
        match *self {
            Gate::Cx { control, .. } | Gate::Crx { control, .. } => Some(control),
            _ => None,
        }
    }

    /// Rotation angle, for rotation gates
    pub const fn theta(&self) -> Option<f64> {
        match *self {
            Gate::Rx { theta, .. } | Gate::Crx { theta, .. } => Some(theta),
            _ => None,
        }
    }

    /// Every qubit this gate touches, control first
    pub fn qubits(&self) -> Vec<QubitId> {
        match self.control() {
            Some(control) => vec![control, self.target()],
            None => vec![self.target()],
        }
    }

    /// Measurement is the only non-unitary kind
    pub const fn is_unitary(&self) -> bool {
        !matches!(self, Gate::M { .. })
    }

    /// Check the gate against a state of `num_qubits` qubits
    ///
    /// # Errors
    /// Returns [`GateError::QubitOutOfBounds`] if any qubit index is not below
    /// `num_qubits`, and [`GateError::ControlIsTarget`] if a controlled gate
    /// names the same qubit twice.
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        if num_qubits > MAX_QUBITS {
            return Err(GateError::TooManyQubits {
                num_qubits,
                max: MAX_QUBITS,
            });
        }

        for qubit in self.qubits() {
            if qubit.index() >= num_qubits {
                return Err(GateError::out_of_bounds(qubit.index(), num_qubits));
            }
        }

        if let Some(control) = self.control() {
            if control == self.target() {
                return Err(GateError::ControlIsTarget { qubit: control });
            }
        }

        Ok(())
    }

    /// Flat descriptor form of this gate
    pub fn descriptor(&self) -> GateDescriptor {
        GateDescriptor {
            kind: self.kind(),
            target: self.target(),
            control: self.control(),
            theta: self.theta(),
        }
    }
}

impl TryFrom<GateDescriptor> for Gate {
    type Error = GateError;

    fn try_from(desc: GateDescriptor) -> Result<Self> {
        let gate = desc.kind.name();
        let control = || desc.control.ok_or(GateError::MissingControl { gate });
        let theta = || desc.theta.ok_or(GateError::MissingAngle { gate });

        let target = desc.target;
        Ok(match desc.kind {
            GateKind::X => Gate::X { target },
            GateKind::H => Gate::H { target },
            GateKind::M => Gate::M { target },
            GateKind::Rx => Gate::Rx {
                target,
                theta: theta()?,
            },
            GateKind::Cx => Gate::Cx {
                control: control()?,
                target,
            },
            GateKind::Crx => Gate::Crx {
                control: control()?,
                target,
                theta: theta()?,
            },
        })
    }
}

impl From<Gate> for GateDescriptor {
    fn from(gate: Gate) -> Self {
        gate.descriptor()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if let Some(theta) = self.theta() {
            write!(f, "({})", theta)?;
        }
        match self.control() {
            Some(control) => write!(f, " {}, {}", control, self.target()),
            None => write!(f, " {}", self.target()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_descriptor_to_gate() {
        let gate = Gate::try_from(GateDescriptor::new(GateKind::H, 1)).unwrap();
        assert_eq!(gate, Gate::h(1));

        let gate =
            Gate::try_from(GateDescriptor::new(GateKind::Crx, 0).with_control(2).with_theta(PI))
                .unwrap();
        assert_eq!(gate, Gate::crx(PI, 2, 0));
    }

    #[test]
    fn test_missing_angle_is_an_error() {
        let err = Gate::try_from(GateDescriptor::new(GateKind::Rx, 0)).unwrap_err();
        assert_eq!(err, GateError::MissingAngle { gate: "RX" });

        let err =
            Gate::try_from(GateDescriptor::new(GateKind::Crx, 0).with_control(1)).unwrap_err();
        assert_eq!(err, GateError::MissingAngle { gate: "CRX" });
    }

    #[test]
    fn test_missing_control_is_an_error() {
        let err = Gate::try_from(GateDescriptor::new(GateKind::Cx, 1)).unwrap_err();
        assert_eq!(err, GateError::MissingControl { gate: "CX" });
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        // A control on an uncontrolled gate carries no meaning
        let desc = GateDescriptor::new(GateKind::X, 0).with_control(1).with_theta(0.3);
        assert_eq!(Gate::try_from(desc).unwrap(), Gate::x(0));
    }

    #[test]
    fn test_validate_bounds() {
        assert!(Gate::x(1).validate(2).is_ok());
        assert_eq!(
            Gate::x(2).validate(2),
            Err(GateError::out_of_bounds(2, 2))
        );
        assert_eq!(
            Gate::cx(3, 0).validate(2),
            Err(GateError::out_of_bounds(3, 2))
        );
        assert!(matches!(
            Gate::h(0).validate(31),
            Err(GateError::TooManyQubits { num_qubits: 31, .. })
        ));
    }

    #[test]
    fn test_validate_control_is_target() {
        assert_eq!(
            Gate::cx(1, 1).validate(2),
            Err(GateError::ControlIsTarget {
                qubit: QubitId::new(1)
            })
        );
    }

    #[test]
    fn test_accessors() {
        let gate = Gate::crx(0.5, 0, 1);
        assert_eq!(gate.kind(), GateKind::Crx);
        assert_eq!(gate.control(), Some(QubitId::new(0)));
        assert_eq!(gate.target(), QubitId::new(1));
        assert_eq!(gate.theta(), Some(0.5));
        assert_eq!(gate.qubits(), vec![QubitId::new(0), QubitId::new(1)]);
        assert!(gate.is_unitary());
        assert!(!Gate::measure(0).is_unitary());
    }

    #[test]
    fn test_display() {
        assert_eq!(Gate::cx(0, 1).to_string(), "CX q0, q1");
        assert_eq!(Gate::rx(0.5, 2).to_string(), "RX(0.5) q2");
    }

    #[test]
    fn test_serde_uses_descriptor_form() {
        let json = serde_json::to_string(&Gate::cx(1, 0)).unwrap();
        assert_eq!(json, r#"{"kind":"CX","target":0,"control":1}"#);

        let gate: Gate = serde_json::from_str(r#"{"kind":"RX","target":1,"theta":0.25}"#).unwrap();
        assert_eq!(gate, Gate::rx(0.25, 1));

        let bad = serde_json::from_str::<Gate>(r#"{"kind":"CRX","target":1,"theta":0.25}"#);
        assert!(bad.unwrap_err().to_string().contains("control qubit"));
    }
}
