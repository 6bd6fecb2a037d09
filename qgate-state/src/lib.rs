//! Gate application engine for complex amplitude state vectors
//!
//! A state of `n` qubits is an ordered array of `2^n` complex amplitudes in
//! which bit `k` of an index is the value of qubit `k`. Every gate in this
//! crate is a pure transformation: the engine copies the caller's
//! amplitudes, transforms the copy and hands it back.
//!
//! # Layout
//!
//! - [`pairs`]: Enumeration of the amplitude index pairs a gate combines
//! - [`kernels`]: In-place pair kernels (swap, X rotation, Hadamard)
//! - [`engine`]: [`GateEngine`], the validated, non-mutating entry point
//! - [`state_vector`]: [`StateVector`], an owned state with queries
//!
//! # Example
//!
//! ```
//! use qgate_core::Gate;
//! use qgate_state::{Amplitude, GateEngine};
//!
//! let engine = GateEngine::default();
//! let ket_10 = vec![
//!     Amplitude::new(0.0, 0.0),
//!     Amplitude::new(0.0, 0.0),
//!     Amplitude::new(1.0, 0.0),
//!     Amplitude::new(0.0, 0.0),
//! ];
//!
//! let ket_11 = engine.apply(&ket_10, &Gate::cx(1, 0), 2).unwrap();
//! assert_eq!(ket_11[3], Amplitude::new(1.0, 0.0));
//! ```

pub mod config;
pub mod engine;
pub mod kernels;
pub mod pairs;
pub mod state_vector;

pub use config::EngineConfig;
pub use engine::GateEngine;
pub use pairs::{ControlledPairs, TargetPairs};
pub use qgate_core::{GateError, Result};
pub use state_vector::StateVector;

/// Complex probability amplitude of one basis state
pub type Amplitude = num_complex::Complex64;
