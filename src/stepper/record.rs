// src/stepper/record.rs
use super::Step;
use crate::measurement::Verdict;
use crate::oracle::FunctionType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened during one completed step, as data for the presentation
/// layer. Formatting is left entirely to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1 through 4, matching [`Step::index`].
    pub index: usize,
    pub step: Step,
    /// The step's label, e.g. `"Apply Oracle"`.
    pub name: String,
    pub explanation: Explanation,
}

impl StepRecord {
    pub(crate) fn new(step: Step, explanation: Explanation) -> Self {
        Self {
            index: step.index(),
            step,
            name: step.label().to_string(),
            explanation,
        }
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {} - {}", self.index, self.name, self.explanation.summary())
    }
}

/// Structured payload of a [`StepRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Explanation {
    /// First Hadamard: `H^{⊗n}|0>^{⊗n} = 2^{-n/2} sum_x |x>`.
    Superposition {
        num_qubits: usize,
        num_states: usize,
    },
    /// Oracle: `U_f|x> = (-1)^{f(x)}|x>`.
    OraclePhase {
        function: FunctionType,
        /// e.g. `"f(x) = 1"`
        function_label: String,
        num_qubits: usize,
        num_states: usize,
    },
    /// Second Hadamard: amplitudes interfere at `|0...0>`.
    Interference {
        num_qubits: usize,
        num_states: usize,
    },
    /// Outcome of the final measurement.
    Measurement {
        outcome: usize,
        /// `outcome` as `n` binary digits
        bits: String,
        verdict: Verdict,
        /// `|a_0|` at the time of measurement
        zero_amplitude: f64,
    },
}

impl Explanation {
    /// One plain-text sentence describing the step.
    pub fn summary(&self) -> String {
        match self {
            Explanation::Superposition { num_qubits, num_states } => format!(
                "Hadamard gates on all {} qubits create an equal superposition of all {} basis states: |ψ⟩ = (1/√{}) Σ_x |x⟩",
                num_qubits, num_states, num_states
            ),
            Explanation::OraclePhase { function_label, num_states, .. } => format!(
                "The oracle applies the phase (-1)^f(x) with {}: |ψ⟩ = (1/√{}) Σ_x (-1)^f(x) |x⟩",
                function_label, num_states
            ),
            Explanation::Interference { num_qubits, num_states } => format!(
                "Hadamard gates interfere the {} amplitudes: |0⟩^⊗{} has amplitude ±1 for constant f and 0 for balanced f (1/{} Σ_y Σ_x (-1)^(f(x) + x·y) |y⟩)",
                num_states, num_qubits, num_states
            ),
            Explanation::Measurement { bits, verdict, zero_amplitude, .. } => format!(
                "Measured |{}⟩ with |amplitude of |0⟩| = {:.3}: the function is {}",
                bits, zero_amplitude, verdict
            ),
        }
    }
}
