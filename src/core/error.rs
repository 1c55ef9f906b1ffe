//! Error handling logic

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DjError>;

/// Failures raised synchronously by configuration, construction and
/// validation. None of these leave a session half-modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DjError {
    /// Qubit count out of range or not an integer, or an unknown function
    /// type name.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong with the requested configuration
        message: String,
    },

    /// A raw amplitude vector whose length is not `2^n` for some `n >= 1`.
    #[error("Dimension mismatch: {len} amplitudes do not form a register of 2^n states")]
    DimensionMismatch {
        /// The offending length
        len: usize,
    },

    /// `sum |a_i|^2` drifted away from 1.
    #[error("Normalization failed: sum(|a_i|^2) = {norm_sq} (deviation > {tolerance})")]
    Normalization {
        /// The measured squared norm
        norm_sq: f64,
        /// The tolerance it was checked against
        tolerance: f64,
    },
}

impl DjError {
    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        DjError::InvalidConfiguration { message: message.into() }
    }
}

/// Why an `advance()` request was turned down.
///
/// These are expected UI-timing races rather than programming errors, so the
/// stepper reports them as a value and leaves its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// The display has not yet committed the previous step's target state.
    #[error("advance rejected: the previous step's animation has not been committed")]
    AnimationPending,
    /// The algorithm already reached its terminal step.
    #[error("advance rejected: the register has already been measured")]
    AlreadyMeasured,
}
