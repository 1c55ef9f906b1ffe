//! Numeric bounds and tolerances shared across the simulator.

/// Smallest register a session may be reset to.
pub const MIN_QUBITS: usize = 1;

/// Largest register a session may be reset to. A dense 2^10 vector is already
/// far more bars than a visualizer can show.
pub const MAX_QUBITS: usize = 10;

/// `|amplitude(|0...0>)|` above this reads as outcome 0.
pub const MEASUREMENT_THRESHOLD: f64 = 0.5;

/// Allowed deviation of `sum |a_i|^2` from 1.0.
pub const NORM_TOLERANCE: f64 = 1e-9;
