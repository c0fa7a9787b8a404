//! Error types for Calc Core

use thiserror::Error;

/// Result type alias using CalcError
pub type Result<T> = std::result::Result<T, CalcError>;

/// Validation and evaluation errors for a calculation request
///
/// Variants are ordered the way the validation pipeline checks them; the
/// display string of each variant is the exact wire-level error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The request body was absent or not a JSON object
    #[error("JSON body required.")]
    BodyRequired,

    /// At least one of `a`, `b`, `operation` was absent or null
    #[error("Required fields: a, b, operation.")]
    MissingFields,

    /// `a` or `b` was not a JSON number
    #[error("a and b must be numbers.")]
    NonNumeric,

    /// `operation` named something outside the supported set
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Divide was requested with a zero divisor
    #[error("Division by zero is not allowed")]
    DivisionByZero,
}
