// src/stepper/mod.rs

//! Drives the Deutsch-Jozsa algorithm one step at a time.
//!
//! The [`AlgorithmStepper`] owns a session: the oracle, the step reached so
//! far, the *current* state the display shows, the *target* state it is
//! animating towards, and the history of [`StepRecord`]s.
//!
//! Each transform step sets a new target and raises an animation guard.
//! The display interpolates from current to target at its own pace and then
//! calls [`AlgorithmStepper::commit_animation`]; until it does, `current`
//! stays put and further `advance()` calls are rejected.

mod record;

pub use record::{Explanation, StepRecord};

use crate::config::SessionConfig;
use crate::core::{QuantumStateVector, Rejection, Result, magnitude};
use crate::display::{BasisBar, bars, interpolate};
use crate::measurement::{MeasurementOutcome, measure};
use crate::oracle::{FunctionType, OracleFunction};
use crate::transform::Transform;
use crate::validation::check_normalization;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// The five positions of the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Ready,
    Hadamard1Done,
    OracleDone,
    Hadamard2Done,
    Measured,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Ready,
        Step::Hadamard1Done,
        Step::OracleDone,
        Step::Hadamard2Done,
        Step::Measured,
    ];

    /// 0 for `Ready` through 4 for `Measured`.
    pub fn index(&self) -> usize {
        match self {
            Step::Ready => 0,
            Step::Hadamard1Done => 1,
            Step::OracleDone => 2,
            Step::Hadamard2Done => 3,
            Step::Measured => 4,
        }
    }

    /// Name of the algorithm phase that produced this step.
    pub fn label(&self) -> &'static str {
        match self {
            Step::Ready => "Initialize",
            Step::Hadamard1Done => "Apply Hadamard Gates",
            Step::OracleDone => "Apply Oracle",
            Step::Hadamard2Done => "Apply Hadamard Gates Again",
            Step::Measured => "Measure",
        }
    }

    /// Heading for a progress display; identical to [`label`](Self::label)
    /// except before the first step.
    pub fn status(&self) -> &'static str {
        match self {
            Step::Ready => "Ready to Start",
            other => other.label(),
        }
    }

    /// Guidance shown under the heading.
    pub fn prompt(&self) -> &'static str {
        match self {
            Step::Ready => "Start the algorithm to begin the Deutsch-Jozsa demonstration.",
            Step::Hadamard1Done => "Quantum states are now in superposition. Advance to apply the oracle.",
            Step::OracleDone => "Oracle has been applied. Advance to apply Hadamard gates again.",
            Step::Hadamard2Done => "Second Hadamard transformation complete. Advance to measure.",
            Step::Measured => {
                "Algorithm complete! Check the measurement result to determine if the function is constant or balanced."
            }
        }
    }

    pub fn next(&self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Measured)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single Deutsch-Jozsa session.
#[derive(Debug, Clone)]
pub struct AlgorithmStepper {
    oracle: OracleFunction,
    step: Step,
    current: QuantumStateVector,
    target: QuantumStateVector,
    animating: bool,
    records: Vec<StepRecord>,
    outcome: Option<MeasurementOutcome>,
}

impl Default for AlgorithmStepper {
    fn default() -> Self {
        Self::fresh(SessionConfig::default())
    }
}

impl AlgorithmStepper {
    /// Starts a session in `Ready` with `current = target = |0...0>`.
    ///
    /// # Errors
    /// `DjError::InvalidConfiguration` unless `1 <= qubit_count <= MAX_QUBITS`.
    pub fn new(qubit_count: usize, function_type: FunctionType) -> Result<Self> {
        Self::from_config(&SessionConfig::new(qubit_count, function_type)?)
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::fresh(*config))
    }

    fn fresh(config: SessionConfig) -> Self {
        let initial = QuantumStateVector::initialize(config.qubit_count);
        Self {
            oracle: OracleFunction::new(config.function_type, config.qubit_count),
            step: Step::Ready,
            target: initial.clone(),
            current: initial,
            animating: false,
            records: Vec::new(),
            outcome: None,
        }
    }

    /// Starts over with a new configuration.
    ///
    /// Validation happens before anything is touched, so on error the
    /// previous session is left exactly as it was.
    pub fn reset(&mut self, qubit_count: usize, function_type: FunctionType) -> Result<()> {
        self.reset_with(&SessionConfig { qubit_count, function_type })
    }

    pub fn reset_with(&mut self, config: &SessionConfig) -> Result<()> {
        config.validate()?;
        *self = Self::fresh(*config);
        info!(
            qubits = config.qubit_count,
            function = %config.function_type,
            "session reset"
        );
        Ok(())
    }

    /// Performs the next step of the algorithm and returns its record.
    ///
    /// Transform steps set a new target and start an animation; measurement
    /// reads the current state and sets no target.
    ///
    /// # Errors
    /// * [`Rejection::AnimationPending`] if the previous target has not been
    ///   committed yet.
    /// * [`Rejection::AlreadyMeasured`] once the algorithm has finished.
    ///
    /// A rejected call changes nothing.
    pub fn advance(&mut self) -> std::result::Result<StepRecord, Rejection> {
        if self.animating {
            warn!(step = %self.step, "advance rejected while animation is pending");
            return Err(Rejection::AnimationPending);
        }

        let num_qubits = self.num_qubits();
        let num_states = self.current.len();
        let (next, explanation) = match self.step {
            Step::Ready => {
                self.begin_animation(Transform::Hadamard);
                (Step::Hadamard1Done, Explanation::Superposition { num_qubits, num_states })
            }
            Step::Hadamard1Done => {
                self.begin_animation(Transform::Oracle);
                let function = self.oracle.function_type();
                (
                    Step::OracleDone,
                    Explanation::OraclePhase {
                        function,
                        function_label: function.label().to_string(),
                        num_qubits,
                        num_states,
                    },
                )
            }
            Step::OracleDone => {
                self.begin_animation(Transform::Hadamard);
                (Step::Hadamard2Done, Explanation::Interference { num_qubits, num_states })
            }
            Step::Hadamard2Done => {
                let outcome = measure(&self.current);
                self.outcome = Some(outcome);
                (
                    Step::Measured,
                    Explanation::Measurement {
                        outcome: outcome.value(),
                        bits: outcome.bits(),
                        verdict: outcome.verdict(),
                        zero_amplitude: magnitude(self.current.amplitude(0)),
                    },
                )
            }
            Step::Measured => {
                warn!("advance rejected: register already measured");
                return Err(Rejection::AlreadyMeasured);
            }
        };

        self.step = next;
        let record = StepRecord::new(next, explanation);
        self.records.push(record.clone());
        info!(step = next.index(), name = next.label(), "advanced");
        Ok(record)
    }

    fn begin_animation(&mut self, transform: Transform) {
        let target = transform.apply(&self.current, &self.oracle);
        if let Err(err) = check_normalization(&target, None) {
            warn!(%transform, error = %err, "transformed state is not normalized");
        }
        self.target = target;
        self.animating = true;
    }

    /// Signals that the display finished interpolating: `current := target`.
    ///
    /// Returns `false` (and does nothing) when no animation was pending.
    pub fn commit_animation(&mut self) -> bool {
        if !self.animating {
            return false;
        }
        self.current = self.target.clone();
        self.animating = false;
        debug!(step = %self.step, "animation committed");
        true
    }

    /// Bars to draw at `progress` through the pending animation, or the
    /// settled current state when nothing is animating.
    pub fn frame(&self, progress: f64) -> Vec<BasisBar> {
        if self.animating {
            interpolate(&self.current, &self.target, progress)
        } else {
            bars(&self.current)
        }
    }

    pub fn current_state(&self) -> &QuantumStateVector {
        &self.current
    }

    pub fn target_state(&self) -> &QuantumStateVector {
        &self.target
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    /// One record per completed step, oldest first.
    pub fn step_records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// The outcome once the register has been measured.
    pub fn measurement(&self) -> Option<&MeasurementOutcome> {
        self.outcome.as_ref()
    }

    pub fn oracle(&self) -> &OracleFunction {
        &self.oracle
    }

    pub fn num_qubits(&self) -> usize {
        self.oracle.num_qubits()
    }
}
