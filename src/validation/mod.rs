// src/validation/mod.rs

//! Provides functions to validate `QuantumStateVector`s.
//!
//! The transforms preserve normalization by construction; these checks exist
//! for tests and for the stepper's diagnostics, not as a runtime gate.

use crate::core::{DjError, NORM_TOLERANCE, QuantumStateVector};

/// Checks that the state vector is normalized (`sum |a_i|^2 ≈ 1.0`).
///
/// # Arguments
/// * `state` - The `QuantumStateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to [`NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(DjError::Normalization)` otherwise.
pub fn check_normalization(state: &QuantumStateVector, tolerance: Option<f64>) -> Result<(), DjError> {
    let tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.total_probability();
    if (norm_sq - 1.0).abs() > tolerance {
        Err(DjError::Normalization { norm_sq, tolerance })
    } else {
        Ok(())
    }
}

/// Checks that two states agree amplitude by amplitude, up to `tolerance`
/// in complex distance. States of different length never agree.
pub fn states_approx_equal(a: &QuantumStateVector, b: &QuantumStateVector, tolerance: f64) -> bool {
    a.len() == b.len()
        && a
            .amplitudes()
            .iter()
            .zip(b.amplitudes())
            .all(|(x, y)| (x - y).norm_sqr() < tolerance * tolerance)
}
