//! Evaluation errors.

use thiserror::Error;

/// Domain failures reported by the evaluator.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("division by zero not allowed")]
    DivisionByZero,

    #[error("square root requires a non-negative number")]
    NegativeSquareRoot,

    #[error("base-10 logarithm requires a positive number")]
    NonPositiveLogarithm,

    #[error("factorial requires a non-negative integer")]
    NegativeFactorial,

    #[error("factorial requires a whole number (no decimals)")]
    FractionalFactorial,

    #[error("factorial result is too large to represent")]
    FactorialOverflow,

    #[error("{operation} requires a second operand")]
    MissingOperand { operation: &'static str },

    #[error("unsupported operation")]
    UnsupportedOperation,
}
