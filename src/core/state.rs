// src/core/state.rs

use super::complex::{Amplitude, magnitude};
use super::error::{DjError, Result};
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// The register's state: `2^n` complex amplitudes, where index `i` is the
/// basis state `|i>` written with `n` binary digits.
///
/// Transforms never mutate a vector in place; each one produces a fresh
/// vector so the previous state can stay on screen as the animation source
/// while the new one is the animation target.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct QuantumStateVector {
    amplitudes: Vec<Amplitude>,
    num_qubits: usize,
}

impl QuantumStateVector {
    /// Creates `|0...0>` on `num_qubits` qubits: amplitude 1 at index 0 and 0
    /// everywhere else.
    ///
    /// `num_qubits` must be small enough for a dense vector; the stepper
    /// bounds it by [`MAX_QUBITS`](crate::core::constants::MAX_QUBITS).
    pub fn initialize(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::one();
        Self { amplitudes, num_qubits }
    }

    /// Wraps raw amplitudes. The length must be `2^n` with `n >= 1`;
    /// normalization is not checked here (see [`crate::validation`]).
    pub fn from_amplitudes(amplitudes: Vec<Amplitude>) -> Result<Self> {
        let len = amplitudes.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(DjError::DimensionMismatch { len });
        }
        let num_qubits = len.trailing_zeros() as usize;
        Ok(Self { amplitudes, num_qubits })
    }

    /// Same-shaped vector built by the transform engine.
    pub(crate) fn with_same_shape(&self, amplitudes: Vec<Amplitude>) -> Self {
        debug_assert_eq!(amplitudes.len(), self.amplitudes.len());
        Self { amplitudes, num_qubits: self.num_qubits }
    }

    /// Read-only access to the amplitudes, ordered by basis index.
    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.amplitudes
    }

    /// Amplitude of basis state `|index>`.
    ///
    /// # Panics
    /// If `index >= self.len()`.
    pub fn amplitude(&self, index: usize) -> Amplitude {
        self.amplitudes[index]
    }

    /// Number of basis states, `2^n`.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always `false`: a register has at least one qubit.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// `|a_i|^2` for every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// `sum |a_i|^2`, which is 1 for any state the transforms produce.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Ket label for `index`, zero-padded to the register width, e.g. `|01>`.
    pub fn basis_label(&self, index: usize) -> String {
        basis_label(index, self.num_qubits)
    }
}

/// `|bits>` with `width` binary digits.
pub fn basis_label(index: usize, width: usize) -> String {
    format!("|{:0width$b}>", index, width = width)
}

impl fmt::Display for QuantumStateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(
                f,
                "{}{}: {:.4} (|a|={:.3})",
                if i > 0 { ", " } else { "" },
                self.basis_label(i),
                c,
                magnitude(*c)
            )?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_is_all_zero_basis_state() {
        for n in 1..=6 {
            let state = QuantumStateVector::initialize(n);
            assert_eq!(state.len(), 1 << n);
            assert_eq!(state.num_qubits(), n);
            assert_eq!(state.amplitude(0), Complex::new(1.0, 0.0));
            assert!(state.amplitudes()[1..].iter().all(|c| c.is_zero()));
            assert_eq!(state.total_probability(), 1.0);
        }
    }

    #[test]
    fn test_probabilities_are_squared_magnitudes() -> Result<()> {
        let state = QuantumStateVector::from_amplitudes(vec![
            Complex::new(0.6, 0.0),
            Complex::new(0.0, -0.8),
        ])?;
        let probs = state.probabilities();
        assert_eq!(probs.len(), 2);
        assert!((probs[0] - 0.36).abs() < 1e-12);
        assert!((probs[1] - 0.64).abs() < 1e-12);
        assert!((probs.iter().sum::<f64>() - state.total_probability()).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_from_amplitudes_rejects_bad_lengths() {
        for len in [0, 1, 3, 6] {
            let err = QuantumStateVector::from_amplitudes(vec![Complex::zero(); len]).unwrap_err();
            assert_eq!(err, DjError::DimensionMismatch { len });
        }
        let state = QuantumStateVector::from_amplitudes(vec![Complex::zero(); 8]).unwrap();
        assert_eq!(state.num_qubits(), 3);
    }

    #[test]
    fn test_basis_label_pads_to_register_width() {
        assert_eq!(basis_label(1, 3), "|001>");
        assert_eq!(basis_label(5, 3), "|101>");
        assert_eq!(QuantumStateVector::initialize(2).basis_label(2), "|10>");
    }
}
