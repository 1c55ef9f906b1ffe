// src/config.rs

//! Session configuration: register width and oracle function.

use crate::core::{DjError, MAX_QUBITS, MIN_QUBITS, Result};
use crate::oracle::FunctionType;
use serde::{Deserialize, Serialize};

/// What a session is reset to.
///
/// Defaults to a single qubit with `f(x) = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub qubit_count: usize,
    pub function_type: FunctionType,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            qubit_count: MIN_QUBITS,
            function_type: FunctionType::default(),
        }
    }
}

impl SessionConfig {
    /// Builds and validates a configuration.
    pub fn new(qubit_count: usize, function_type: FunctionType) -> Result<Self> {
        let config = Self { qubit_count, function_type };
        config.validate()?;
        Ok(config)
    }

    /// Parses the raw values a form control hands over, e.g. `("3", "balanced")`.
    pub fn parse(qubit_count: &str, function_type: &str) -> Result<Self> {
        let qubits = qubit_count.trim();
        let qubit_count = qubits.parse::<usize>().map_err(|_| {
            DjError::invalid_configuration(format!("qubit count '{}' is not a non-negative integer", qubits))
        })?;
        let function_type = function_type.trim().parse::<FunctionType>()?;
        Self::new(qubit_count, function_type)
    }

    /// Checks `MIN_QUBITS <= qubit_count <= MAX_QUBITS`.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&self.qubit_count) {
            return Err(DjError::invalid_configuration(format!(
                "qubit count {} is outside [{}, {}]",
                self.qubit_count, MIN_QUBITS, MAX_QUBITS
            )));
        }
        Ok(())
    }
}
