//! Form input handling.
//!
//! The UI collects an operation key and operand text. This module turns that
//! raw text into an [`EvaluationRequest`](crate::core::EvaluationRequest),
//! using Stillwater's `Validation` to report every invalid field at once
//! instead of failing on the first.

pub mod error;
pub mod form;

pub use error::InputError;
pub use form::{FormValidation, OperandForm};
