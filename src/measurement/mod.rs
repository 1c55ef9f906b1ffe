// src/measurement/mod.rs

//! Reading a classical answer out of the final state.

use crate::core::{MEASUREMENT_THRESHOLD, QuantumStateVector, basis_label, magnitude};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The classical conclusion about `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Constant,
    Balanced,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Constant => write!(f, "constant"),
            Verdict::Balanced => write!(f, "balanced"),
        }
    }
}

/// A measured basis index in `[0, 2^n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasurementOutcome {
    value: usize,
    num_qubits: usize,
}

impl MeasurementOutcome {
    pub fn value(&self) -> usize {
        self.value
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The outcome as `n` binary digits, e.g. `"001"`.
    pub fn bits(&self) -> String {
        format!("{:0width$b}", self.value, width = self.num_qubits)
    }

    /// `|0...0>` means constant; anything else means balanced.
    pub fn verdict(&self) -> Verdict {
        if self.value == 0 { Verdict::Constant } else { Verdict::Balanced }
    }
}

impl fmt::Display for MeasurementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", basis_label(self.value, self.num_qubits), self.verdict())
    }
}

/// Measures the register after the second Hadamard transform.
///
/// Deutsch-Jozsa leaves `|0...0>` with magnitude ~1 for a constant `f` and ~0
/// for a balanced one, so the amplitude of index 0 decides the outcome
/// without sampling: 0 when it exceeds [`MEASUREMENT_THRESHOLD`], otherwise 1.
pub fn measure(state: &QuantumStateVector) -> MeasurementOutcome {
    let value = if magnitude(state.amplitude(0)) > MEASUREMENT_THRESHOLD { 0 } else { 1 };
    MeasurementOutcome { value, num_qubits: state.num_qubits() }
}
