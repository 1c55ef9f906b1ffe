// src/transform/mod.rs

//! The two linear operators of the Deutsch-Jozsa circuit.
//!
//! Both map a [`QuantumStateVector`] to a fresh vector of the same shape and
//! leave their input untouched.

use crate::core::{QuantumStateVector, add, multiply};
use crate::oracle::OracleFunction;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;
use tracing::debug;

/// A transform the stepper can apply between two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// `H^{⊗n}` on the whole register.
    Hadamard,
    /// `U_f |x> = (-1)^{f(x)} |x>`.
    Oracle,
}

impl Transform {
    pub fn apply(&self, state: &QuantumStateVector, oracle: &OracleFunction) -> QuantumStateVector {
        match self {
            Transform::Hadamard => apply_hadamard(state),
            Transform::Oracle => apply_oracle(state, oracle),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Hadamard => write!(f, "H^n"),
            Transform::Oracle => write!(f, "U_f"),
        }
    }
}

/// Applies the n-fold tensor Hadamard transform.
///
/// Uses the closed form of `H^{⊗n}`:
///
/// `new[i] = 2^{-n/2} * sum_j (-1)^{popcount(i & j)} * old[j]`
///
/// as a full `O(4^n)` double loop. The transform is self-inverse.
pub fn apply_hadamard(state: &QuantumStateVector) -> QuantumStateVector {
    let dim = state.len();
    let norm = 1.0 / (dim as f64).sqrt();
    let old = state.amplitudes();
    debug!(dim, "applying Hadamard transform");

    let mut new_vec = vec![Complex::zero(); dim];
    for (i, slot) in new_vec.iter_mut().enumerate() {
        let mut acc = Complex::zero();
        for (j, amp) in old.iter().enumerate() {
            let sign = if (i & j).count_ones() % 2 == 0 { 1.0 } else { -1.0 };
            acc = add(acc, *amp * (sign * norm));
        }
        *slot = acc;
    }

    state.with_same_shape(new_vec)
}

/// Applies the oracle phase flip `new[i] = old[i] * (-1)^{f(i)}`.
///
/// Only the sign of each amplitude changes; magnitudes are preserved and
/// basis states never mix.
pub fn apply_oracle(state: &QuantumStateVector, oracle: &OracleFunction) -> QuantumStateVector {
    debug!(dim = state.len(), function = %oracle.function_type(), "applying oracle");

    let new_vec = state
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(i, amp)| {
            let phase = if oracle.evaluate(i) == 1 { -1.0 } else { 1.0 };
            multiply(*amp, Complex::new(phase, 0.0))
        })
        .collect();

    state.with_same_shape(new_vec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DjError;
    use crate::oracle::FunctionType;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn assert_complex_vec_approx_equal(
        actual: &[Complex<f64>],
        expected: &[Complex<f64>],
        tolerance: f64,
        context: &str,
    ) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < tolerance * tolerance,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, Context: {}",
                i, actual[i], expected[i], context
            );
        }
    }

    fn real(values: &[f64]) -> Vec<Complex<f64>> {
        values.iter().map(|&re| Complex::new(re, 0.0)).collect()
    }

    #[test]
    fn test_hadamard_single_qubit_matrix() -> Result<(), DjError> {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let zero = QuantumStateVector::initialize(1);
        assert_complex_vec_approx_equal(apply_hadamard(&zero).amplitudes(), &real(&[s, s]), TEST_TOLERANCE, "H|0>");

        let one = QuantumStateVector::from_amplitudes(real(&[0.0, 1.0]))?;
        assert_complex_vec_approx_equal(apply_hadamard(&one).amplitudes(), &real(&[s, -s]), TEST_TOLERANCE, "H|1>");
        Ok(())
    }

    #[test]
    fn test_hadamard_creates_uniform_superposition() {
        for n in 1..=6 {
            let state = apply_hadamard(&QuantumStateVector::initialize(n));
            let expected = 1.0 / ((1usize << n) as f64).sqrt();
            for amp in state.amplitudes() {
                assert!((amp.re - expected).abs() < TEST_TOLERANCE);
                assert!(amp.im.abs() < TEST_TOLERANCE);
            }
        }
    }

    #[test]
    fn test_hadamard_is_self_inverse_on_basis_states() -> Result<(), DjError> {
        let n = 3;
        for k in 0..(1 << n) {
            let mut amps = vec![Complex::zero(); 1 << n];
            amps[k] = Complex::new(0.0, 1.0);
            let state = QuantumStateVector::from_amplitudes(amps)?;
            let twice = apply_hadamard(&apply_hadamard(&state));
            assert_complex_vec_approx_equal(twice.amplitudes(), state.amplitudes(), TEST_TOLERANCE, "HH|k>");
        }
        Ok(())
    }

    #[test]
    fn test_hadamard_does_not_touch_input() {
        let state = QuantumStateVector::initialize(2);
        let before = state.clone();
        let _ = apply_hadamard(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_oracle_flips_signs_by_parity() {
        let oracle = OracleFunction::new(FunctionType::Balanced, 2);
        let state = apply_hadamard(&QuantumStateVector::initialize(2));
        let flipped = apply_oracle(&state, &oracle);
        assert_complex_vec_approx_equal(flipped.amplitudes(), &real(&[0.5, -0.5, -0.5, 0.5]), TEST_TOLERANCE, "U_f H|00>");
    }

    #[test]
    fn test_oracle_preserves_magnitudes_and_imaginary_parts() -> Result<(), DjError> {
        let state = QuantumStateVector::from_amplitudes(vec![
            Complex::new(0.5, 0.5),
            Complex::new(0.0, -0.5),
            Complex::new(-0.5, 0.0),
            Complex::new(0.0, 0.0),
        ])?;
        let oracle = OracleFunction::new(FunctionType::ConstantOne, 2);
        let flipped = apply_oracle(&state, &oracle);
        for (old, new) in state.amplitudes().iter().zip(flipped.amplitudes()) {
            assert!((old.norm() - new.norm()).abs() < TEST_TOLERANCE);
            assert!((old + new).norm() < TEST_TOLERANCE, "every amplitude should be negated");
        }
        Ok(())
    }

    #[test]
    fn test_transform_dispatch() {
        let oracle = OracleFunction::new(FunctionType::ConstantZero, 1);
        let state = QuantumStateVector::initialize(1);
        assert_eq!(Transform::Hadamard.apply(&state, &oracle), apply_hadamard(&state));
        assert_eq!(Transform::Oracle.apply(&state, &oracle), state);
    }
}
