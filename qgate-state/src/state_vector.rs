//! Owned state vector value type

use crate::engine::{check_dimension, GateEngine};
use crate::Amplitude;
use qgate_core::{Gate, GateError, Result, MAX_QUBITS};
use std::fmt;

/// Quantum state as `2^n` complex amplitudes
///
/// Applying a gate produces a new `StateVector`; the original is left as it
/// was. No operation here normalizes the amplitudes.
///
/// # Example
///
/// ```
/// use qgate_core::Gate;
/// use qgate_state::{GateEngine, StateVector};
///
/// let engine = GateEngine::default();
/// let ket0 = StateVector::zero(1).unwrap();
/// let ket1 = ket0.apply(&engine, &Gate::x(0)).unwrap();
///
/// assert_eq!(ket1.probabilities(), vec![0.0, 1.0]);
/// assert_eq!(ket0.probabilities(), vec![1.0, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Amplitude>,
}

impl StateVector {
    /// Create a state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns error if `num_qubits` exceeds [`MAX_QUBITS`]
    pub fn zero(num_qubits: usize) -> Result<Self> {
        Self::basis(num_qubits, 0)
    }

    /// Create the computational basis state `|index⟩`
    ///
    /// # Errors
    /// Returns error if `num_qubits` is too large or `index >= 2^num_qubits`
    pub fn basis(num_qubits: usize, index: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(GateError::TooManyQubits {
                num_qubits,
                max: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        if index >= dimension {
            return Err(GateError::BasisIndexOutOfRange { index, dimension });
        }

        let mut amplitudes = vec![Amplitude::new(0.0, 0.0); dimension];
        amplitudes[index] = Amplitude::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Wrap caller-supplied amplitudes
    ///
    /// # Errors
    /// Returns error if `amplitudes.len() != 2^num_qubits`
    pub fn from_amplitudes(num_qubits: usize, amplitudes: Vec<Amplitude>) -> Result<Self> {
        check_dimension(amplitudes.len(), num_qubits)?;
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Wrap amplitudes, inferring the qubit count from their number
    ///
    /// # Errors
    /// Returns [`GateError::InvalidDimension`] unless the length is a power of two
    pub fn from_vec(amplitudes: Vec<Amplitude>) -> Result<Self> {
        let dimension = amplitudes.len();
        if !dimension.is_power_of_two() {
            return Err(GateError::InvalidDimension { dimension });
        }
        Self::from_amplitudes(dimension.trailing_zeros() as usize, amplitudes)
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.amplitudes
    }

    pub fn into_inner(self) -> Vec<Amplitude> {
        self.amplitudes
    }

    /// Sum of squared magnitudes (1 for a physical state)
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Probability of every basis state, in index order
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Check if the total probability is 1 within `epsilon`
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() < epsilon
    }

    /// Apply `gate` and return the resulting state
    pub fn apply(&self, engine: &GateEngine, gate: &Gate) -> Result<Self> {
        let amplitudes = engine.apply(&self.amplitudes, gate, self.num_qubits)?;
        Ok(Self {
            num_qubits: self.num_qubits,
            amplitudes,
        })
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.num_qubits;
        for (index, amp) in self.amplitudes.iter().enumerate() {
            if amp.norm_sqr() == 0.0 {
                continue;
            }
            writeln!(f, "|{:0width$b}⟩: {:+.6} {:+.6}i", index, amp.re, amp.im, width = width)?;
        }
        Ok(())
    }
}

impl AsRef<[Amplitude]> for StateVector {
    fn as_ref(&self) -> &[Amplitude] {
        &self.amplitudes
    }
}
