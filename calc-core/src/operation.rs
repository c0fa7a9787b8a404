//! Supported calculator operations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::number::Number;

/// Wire names of the supported operations, in canonical order
pub const SUPPORTED_OPERATIONS: [&str; 4] = ["add", "subtract", "multiply", "divide"];

/// One of the four supported arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Canonical wire name of the operation
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation to two operands
    ///
    /// Division by zero is the only failure. Divide always yields a float;
    /// the other operations keep integer typing for integer operands.
    pub fn apply(self, a: Number, b: Number) -> Result<Number, CalcError> {
        match self {
            Self::Add => Ok(a.add(b)),
            Self::Subtract => Ok(a.sub(b)),
            Self::Multiply => Ok(a.mul(b)),
            Self::Divide => {
                if b.is_zero() {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(a.div(b))
                }
            }
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
