//! The operand form: raw text fields as typed by the user.

use crate::core::{EvaluationRequest, Operation};
use crate::input::error::InputError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validation outcome carrying every input error found.
pub type FormValidation<T> = Validation<T, NonEmptyVec<InputError>>;

/// Raw form contents before parsing.
///
/// Operand B is optional because the UI disables it for unary operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperandForm {
    pub operation_key: String,
    pub operand_a: String,
    pub operand_b: Option<String>,
}

impl OperandForm {
    pub fn new(operation_key: impl Into<String>, operand_a: impl Into<String>) -> Self {
        Self {
            operation_key: operation_key.into(),
            operand_a: operand_a.into(),
            operand_b: None,
        }
    }

    /// Set the operand B field
    pub fn with_operand_b(mut self, operand_b: impl Into<String>) -> Self {
        self.operand_b = Some(operand_b.into());
        self
    }

    /// Parse the form into an evaluation request, accumulating ALL errors.
    ///
    /// Operand B is ignored for unary operations, matching a disabled input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcbook::input::OperandForm;
    /// use stillwater::Validation;
    ///
    /// let form = OperandForm::new("div", "ten").with_operand_b("");
    /// match form.validate() {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    ///     Validation::Success(_) => panic!("expected both operands to be rejected"),
    /// }
    /// ```
    pub fn validate(&self) -> FormValidation<EvaluationRequest> {
        let operation = Operation::from_key(self.operation_key.trim());

        let operation_check: FormValidation<Operation> = match operation {
            Some(op) => Validation::success(op),
            None => Validation::fail(InputError::UnsupportedOperation {
                key: self.operation_key.clone(),
            }),
        };

        let a_check = required_operand("a", Some(self.operand_a.as_str()));

        let b_check = match operation {
            Some(op) if !op.needs_second_operand() => Validation::success(None),
            Some(_) => required_operand("b", self.operand_b.as_deref()).map(Some),
            None => optional_operand("b", self.operand_b.as_deref()),
        };

        operation_check
            .and(a_check)
            .and(b_check)
            .and_then(|((operation, a), b)| {
                Validation::from_result(EvaluationRequest::new(operation, a, b))
                    .map_err(|error| NonEmptyVec::singleton(InputError::from(error)))
            })
    }
}

fn required_operand(field: &'static str, text: Option<&str>) -> FormValidation<f64> {
    match text.map(str::trim) {
        None | Some("") => Validation::fail(InputError::MissingOperand { field }),
        Some(text) => parse_number(field, text),
    }
}

fn optional_operand(field: &'static str, text: Option<&str>) -> FormValidation<Option<f64>> {
    match text.map(str::trim) {
        None | Some("") => Validation::success(None),
        Some(text) => parse_number(field, text).map(Some),
    }
}

fn parse_number(field: &'static str, text: &str) -> FormValidation<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Validation::success(value),
        _ => Validation::fail(InputError::InvalidNumber {
            field,
            text: text.to_string(),
        }),
    }
}
