// src/core/mod.rs

//! Core data structures and types

pub mod complex;
pub mod constants;
pub mod error;
pub mod state;

pub use complex::{Amplitude, add, magnitude, multiply, phase_angle};
pub use constants::{MAX_QUBITS, MEASUREMENT_THRESHOLD, MIN_QUBITS, NORM_TOLERANCE};
pub use error::{DjError, Rejection, Result};
pub use state::{QuantumStateVector, basis_label};
