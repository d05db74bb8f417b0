//! Calculator session: the imperative shell around the pure core.
//!
//! A [`Calculator`] owns the history log for one session. Each submission
//! is computed by a pure [`Calculator::step`] and then applied in one go by
//! [`Calculator::apply_result`], so a failure never touches the history.

use crate::core::{evaluate, EvaluationRequest, EvaluationResult, HistoryEntry, HistoryLog};
use crate::input::OperandForm;
use stillwater::validation::Validation;
use tracing::{debug, info, warn};

/// Where the session is in its interaction cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet.
    Idle,
    /// At least one submission has resolved; a banner is available.
    Computed,
}

/// Result of a single submission, before it is applied to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// Evaluation succeeded and produced a history entry.
    Computed(HistoryEntry),

    /// Evaluation or input checking failed.
    Rejected { message: String },
}

/// Session state held by the calling shell.
///
/// # Example
///
/// ```rust
/// use calcbook::input::OperandForm;
/// use calcbook::session::Calculator;
///
/// let mut calculator = Calculator::new();
///
/// let result = calculator.submit_form(&OperandForm::new("div", "10").with_operand_b("0"));
/// assert_eq!(result.message(), Some("division by zero not allowed"));
/// assert!(calculator.history().is_empty());
///
/// let result = calculator.submit_form(&OperandForm::new("add", "2").with_operand_b("3"));
/// assert_eq!(result.value(), Some(5.0));
/// assert_eq!(calculator.history().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    history: HistoryLog,
    last_result: Option<EvaluationResult>,
}

impl Calculator {
    /// Start a session with an empty history.
    pub fn new() -> Self {
        Self {
            history: HistoryLog::new(),
            last_result: None,
        }
    }

    /// Current phase (pure)
    pub fn phase(&self) -> Phase {
        match self.last_result {
            None => Phase::Idle,
            Some(_) => Phase::Computed,
        }
    }

    /// History log (pure)
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Outcome of the most recent submission, if any.
    pub fn last_result(&self) -> Option<&EvaluationResult> {
        self.last_result.as_ref()
    }

    /// Evaluate a request without touching session state.
    pub fn step(&self, request: &EvaluationRequest) -> StepResult {
        match evaluate(request) {
            Ok(value) => StepResult::Computed(HistoryEntry::from_evaluation(request, value)),
            Err(error) => StepResult::Rejected {
                message: error.to_string(),
            },
        }
    }

    /// Apply the result from `step()`: record on success, leave the history
    /// unchanged on failure.
    pub fn apply_result(&mut self, result: StepResult) -> EvaluationResult {
        let outcome = match result {
            StepResult::Computed(entry) => {
                let value = entry.result();
                info!(
                    operation = entry.operation().key(),
                    value,
                    history_len = self.history.len() + 1,
                    "recorded evaluation"
                );
                self.history.record(entry);
                EvaluationResult::Success { value }
            }
            StepResult::Rejected { message } => {
                debug!(%message, "evaluation rejected");
                EvaluationResult::Failure { message }
            }
        };

        self.last_result = Some(outcome.clone());
        outcome
    }

    /// Evaluate a request and apply the outcome.
    pub fn submit(&mut self, request: &EvaluationRequest) -> EvaluationResult {
        debug!(
            operation = request.operation().key(),
            a = request.operand_a(),
            b = ?request.operand_b(),
            "submitting"
        );
        let result = self.step(request);
        self.apply_result(result)
    }

    /// Parse a form, then evaluate and apply it.
    ///
    /// Rejected forms are reported with every input error joined by `"; "`
    /// and leave the history unchanged.
    pub fn submit_form(&mut self, form: &OperandForm) -> EvaluationResult {
        match form.validate() {
            Validation::Success(request) => self.submit(&request),
            Validation::Failure(errors) => {
                let message = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                warn!(errors = errors.len(), %message, "form rejected");
                self.apply_result(StepResult::Rejected { message })
            }
        }
    }
}
