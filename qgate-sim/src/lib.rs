//! Circuit execution on top of the qgate engine
//!
//! A [`Circuit`] is an ordered list of instructions on a fixed number of
//! qubits. The [`Executor`] starts from |0...0⟩ (or a caller-supplied
//! state), threads the state vector through every instruction using a
//! [`qgate_state::GateEngine`] and reports the final state.
//!
//! # Example
//!
//! ```
//! use qgate_sim::{Circuit, Executor};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(0).unwrap().cx(0, 1).unwrap();
//!
//! let result = Executor::default().run(&circuit).unwrap();
//! let probs = result.probabilities();
//! assert!((probs[0] - 0.5).abs() < 1e-12);
//! assert!((probs[3] - 0.5).abs() < 1e-12);
//! ```

pub mod circuit;
pub mod config;
pub mod error;
pub mod executor;
pub mod result;

pub use circuit::{Circuit, Instruction};
pub use config::ExecutionConfig;
pub use error::{ExecutionError, Result};
pub use executor::Executor;
pub use result::SimulationResult;
