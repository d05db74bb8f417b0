//! The closed set of calculator operations.
//!
//! Every operation carries a stable key (used by the input layer and the
//! shell), a display label (used by rendering and history) and an arity.

use super::error::EvaluationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of operands an operation consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    /// Operand count as a number.
    pub fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// A calculator operation.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{Arity, Operation};
///
/// let op: Operation = "sqrt".parse().unwrap();
/// assert_eq!(op, Operation::SquareRoot);
/// assert_eq!(op.arity(), Arity::Unary);
/// assert_eq!(op.label(), "Square root (√a)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "sub")]
    Subtract,
    #[serde(rename = "mul")]
    Multiply,
    #[serde(rename = "div")]
    Divide,
    #[serde(rename = "pow")]
    Power,
    #[serde(rename = "sqrt")]
    SquareRoot,
    #[serde(rename = "log10")]
    Log10,
    #[serde(rename = "fact")]
    Factorial,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Operation; 8] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::SquareRoot,
        Self::Log10,
        Self::Factorial,
    ];

    /// Stable selector key, e.g. `"add"` or `"log10"`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "sub",
            Self::Multiply => "mul",
            Self::Divide => "div",
            Self::Power => "pow",
            Self::SquareRoot => "sqrt",
            Self::Log10 => "log10",
            Self::Factorial => "fact",
        }
    }

    /// Human-readable label shown in menus and history.
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Addition (a + b)",
            Self::Subtract => "Subtraction (a − b)",
            Self::Multiply => "Multiplication (a × b)",
            Self::Divide => "Division (a ÷ b)",
            Self::Power => "Power (a ^ b)",
            Self::SquareRoot => "Square root (√a)",
            Self::Log10 => "Base-10 logarithm (log10 a)",
            Self::Factorial => "Factorial (a!)",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => {
                Arity::Binary
            }
            Self::SquareRoot | Self::Log10 | Self::Factorial => Arity::Unary,
        }
    }

    /// Whether the operand B input applies to this operation.
    pub fn needs_second_operand(self) -> bool {
        self.arity() == Arity::Binary
    }

    /// Look up an operation by its selector key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or(EvaluationError::UnsupportedOperation)
    }
}
