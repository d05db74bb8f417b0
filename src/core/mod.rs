//! Pure calculator core.
//!
//! This module contains the side-effect free part of the calculator:
//! - The closed set of operations and their arity
//! - The evaluator and its domain checks
//! - Number formatting for display
//! - The newest-first history log
//!
//! Nothing in this module performs I/O or logging.

mod error;
mod evaluator;
mod format;
mod history;
mod operation;

pub use error::EvaluationError;
pub use evaluator::{evaluate, evaluate_key, EvaluationRequest, EvaluationResult};
pub use format::{format_number, format_value};
pub use history::{HistoryEntry, HistoryLog, VISIBLE_HISTORY_LIMIT};
pub use operation::{Arity, Operation};
