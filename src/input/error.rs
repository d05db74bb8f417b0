//! Input errors reported while reading the operand form.

use crate::core::EvaluationError;
use thiserror::Error;

/// Problems with what the user typed into the form.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("unsupported operation")]
    UnsupportedOperation { key: String },

    #[error("value {field} is required")]
    MissingOperand { field: &'static str },

    #[error("value {field} is not a valid number: '{text}'")]
    InvalidNumber { field: &'static str, text: String },

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
