//! Core types for the qgate state-vector engine
//!
//! This crate provides the vocabulary shared by the engine and the circuit
//! executor:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Gate`]: Typed gate model carrying exactly the fields each kind needs
//! - [`GateDescriptor`]: Untyped, serializable gate form used at the boundary
//! - [`GateError`]: Errors raised while validating or applying gates
//!
//! # Example
//! ```
//! use qgate_core::{Gate, GateDescriptor, GateKind, QubitId};
//!
//! let descriptor = GateDescriptor::new(GateKind::Cx, 0).with_control(1);
//! let gate = Gate::try_from(descriptor).unwrap();
//! assert_eq!(gate.control(), Some(QubitId::new(1)));
//! gate.validate(2).unwrap();
//! ```

pub mod error;
pub mod gate;
pub mod qubit;

pub use error::{GateError, Result};
pub use gate::{Gate, GateDescriptor, GateKind};
pub use qubit::QubitId;

/// Largest qubit count accepted by the engine (2^30 amplitudes)
pub const MAX_QUBITS: usize = 30;
