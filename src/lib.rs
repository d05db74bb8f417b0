//! Calcbook: a pure calculator core with a session history
//!
//! Calcbook follows the "pure core, imperative shell" philosophy. The core
//! maps an operation and its operands to a result or a domain failure with
//! pure functions, while the session owns the mutable history and the shell
//! handles terminal I/O.
//!
//! # Core Concepts
//!
//! - **Operation**: a closed set of eight operations, each with an arity
//! - **Evaluator**: pure function enforcing per-operation domain checks
//! - **History**: newest-first log of successful evaluations, 20 visible
//!
//! # Example
//!
//! ```rust
//! use calcbook::core::{evaluate, format_value, EvaluationRequest, HistoryEntry, HistoryLog, Operation};
//!
//! let mut history = HistoryLog::new();
//!
//! let request = EvaluationRequest::new(Operation::Add, 2.0, Some(3.0)).unwrap();
//! let value = evaluate(&request).unwrap();
//! history.record(HistoryEntry::from_evaluation(&request, value));
//!
//! assert_eq!(format_value(value), "5");
//! assert_eq!(history.visible().count(), 1);
//! ```

pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod render;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    evaluate, evaluate_key, format_number, EvaluationError, EvaluationRequest, EvaluationResult,
    HistoryEntry, HistoryLog, Operation,
};
pub use session::Calculator;
