// src/oracle/mod.rs

//! The boolean functions `f: {0,1}^n -> {0,1}` the Deutsch-Jozsa oracle can
//! encode.
//!
//! Only three are offered. The balanced one is a fixed parity function
//! rather than an arbitrary truth table.

use crate::core::DjError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which function the oracle encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FunctionType {
    /// `f(x) = 0` for every `x`.
    #[default]
    #[serde(rename = "constant0")]
    ConstantZero,
    /// `f(x) = 1` for every `x`.
    #[serde(rename = "constant1")]
    ConstantOne,
    /// Half the inputs map to 0, half to 1.
    #[serde(rename = "balanced")]
    Balanced,
}

impl FunctionType {
    /// All selectable functions, in UI order.
    pub const ALL: [FunctionType; 3] = [
        FunctionType::ConstantZero,
        FunctionType::ConstantOne,
        FunctionType::Balanced,
    ];

    /// Name used on the UI boundary: `constant0`, `constant1` or `balanced`.
    pub fn name(&self) -> &'static str {
        match self {
            FunctionType::ConstantZero => "constant0",
            FunctionType::ConstantOne => "constant1",
            FunctionType::Balanced => "balanced",
        }
    }

    /// Mathematical label shown next to the oracle step.
    pub fn label(&self) -> &'static str {
        match self {
            FunctionType::ConstantZero => "f(x) = 0",
            FunctionType::ConstantOne => "f(x) = 1",
            FunctionType::Balanced => "f(x) = balanced",
        }
    }

    pub fn is_constant(&self) -> bool {
        !matches!(self, FunctionType::Balanced)
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionType {
    type Err = DjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constant0" => Ok(FunctionType::ConstantZero),
            "constant1" => Ok(FunctionType::ConstantOne),
            "balanced" => Ok(FunctionType::Balanced),
            other => Err(DjError::invalid_configuration(format!(
                "unknown function type '{}', expected one of constant0, constant1, balanced",
                other
            ))),
        }
    }
}

/// `f(x)` over `n`-bit inputs, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OracleFunction {
    function_type: FunctionType,
    num_qubits: usize,
}

impl OracleFunction {
    pub fn new(function_type: FunctionType, num_qubits: usize) -> Self {
        Self { function_type, num_qubits }
    }

    pub fn function_type(&self) -> FunctionType {
        self.function_type
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Evaluates `f(x)`, returning 0 or 1.
    ///
    /// The balanced function is the low bit of `x` on a single qubit and the
    /// parity of `x` (`popcount(x) mod 2`) on wider registers.
    pub fn evaluate(&self, x: usize) -> u8 {
        match self.function_type {
            FunctionType::ConstantZero => 0,
            FunctionType::ConstantOne => 1,
            FunctionType::Balanced if self.num_qubits == 1 => (x & 1) as u8,
            FunctionType::Balanced => (x.count_ones() % 2) as u8,
        }
    }

    /// `f(x)` for every `x` in `[0, 2^n)`.
    pub fn truth_table(&self) -> Vec<u8> {
        (0..1usize << self.num_qubits).map(|x| self.evaluate(x)).collect()
    }

    /// Number of inputs with `f(x) = 1`.
    pub fn count_ones(&self) -> usize {
        self.truth_table().iter().filter(|&&fx| fx == 1).count()
    }

    /// `true` when exactly half of `[0, 2^n)` maps to 1.
    pub fn is_balanced_on_domain(&self) -> bool {
        self.count_ones() * 2 == 1usize << self.num_qubits
    }
}

impl fmt::Display for OracleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oracle({}, n={})", self.function_type.label(), self.num_qubits)
    }
}
