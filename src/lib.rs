// src/lib.rs

//! `djsim` - A step-by-step simulator for the Deutsch-Jozsa algorithm
//!
//! The crate holds the state-vector engine behind an animated visualizer:
//! complex amplitudes, the Hadamard and oracle transforms, a five-step state
//! machine, and the final measurement. Drawing is left to the caller, which
//! reads the stepper's current and target states and interpolates between
//! them at its own pace.

pub mod config;
pub mod core;
pub mod display;
pub mod measurement;
pub mod oracle;
pub mod stepper;
pub mod transform;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use config::SessionConfig;
pub use self::core::{DjError, QuantumStateVector, Rejection};
pub use display::BasisBar;
pub use measurement::{MeasurementOutcome, Verdict, measure};
pub use oracle::{FunctionType, OracleFunction};
pub use stepper::{AlgorithmStepper, Explanation, Step, StepRecord};
pub use transform::{Transform, apply_hadamard, apply_oracle};
pub use validation::check_normalization;

// Example: Balanced function on two qubits
// Walks through all four steps, committing each animation immediately the
// way a test harness (rather than a render loop) would.
/// ```
/// use djsim::{AlgorithmStepper, FunctionType, Rejection, Step, Verdict, DjError};
///
/// let mut stepper = AlgorithmStepper::new(2, FunctionType::Balanced)?;
///
/// // Three transform steps, each followed by the display's commit
/// for expected in [Step::Hadamard1Done, Step::OracleDone, Step::Hadamard2Done] {
///     let record = stepper.advance().expect("transform step accepted");
///     assert_eq!(record.step, expected);
///     // A second advance before the commit is turned down
///     assert_eq!(stepper.advance(), Err(Rejection::AnimationPending));
///     stepper.commit_animation();
/// }
///
/// // |00> has interfered away completely
/// assert!(stepper.current_state().amplitude(0).norm() < 1e-9);
///
/// stepper.advance().expect("measurement accepted");
/// let outcome = stepper.measurement().expect("measured");
/// assert_ne!(outcome.value(), 0);
/// assert_eq!(outcome.verdict(), Verdict::Balanced);
///
/// assert_eq!(stepper.advance(), Err(Rejection::AlreadyMeasured));
/// # Ok::<(), DjError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
