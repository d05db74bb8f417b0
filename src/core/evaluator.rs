//! Pure evaluation of calculator requests.
//!
//! Evaluation is deterministic and side-effect free. Every domain violation
//! is returned as an [`EvaluationError`]; nothing here panics.

use super::error::EvaluationError;
use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// Largest factorial argument whose result is a finite `f64`.
const MAX_FACTORIAL_ARGUMENT: f64 = 170.0;

/// A validated evaluation request.
///
/// Operand B is present exactly when the operation is binary.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{EvaluationRequest, Operation};
///
/// let request = EvaluationRequest::new(Operation::Factorial, 5.0, Some(9.0)).unwrap();
/// // Unary operations never carry a second operand
/// assert_eq!(request.operand_b(), None);
///
/// assert!(EvaluationRequest::new(Operation::Add, 1.0, None).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluationRequest {
    operation: Operation,
    operand_a: f64,
    operand_b: Option<f64>,
}

impl EvaluationRequest {
    /// Build a request, enforcing the arity invariant.
    ///
    /// A missing operand B for a binary operation is an error. An operand B
    /// supplied for a unary operation is dropped.
    pub fn new(
        operation: Operation,
        operand_a: f64,
        operand_b: Option<f64>,
    ) -> Result<Self, EvaluationError> {
        let operand_b = if operation.needs_second_operand() {
            Some(operand_b.ok_or(EvaluationError::MissingOperand {
                operation: operation.label(),
            })?)
        } else {
            None
        };

        Ok(Self {
            operation,
            operand_a,
            operand_b,
        })
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operand_a(&self) -> f64 {
        self.operand_a
    }

    pub fn operand_b(&self) -> Option<f64> {
        self.operand_b
    }

    fn second(&self) -> Result<f64, EvaluationError> {
        self.operand_b.ok_or(EvaluationError::MissingOperand {
            operation: self.operation.label(),
        })
    }
}

/// Tagged outcome of an evaluation, suitable for display layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum EvaluationResult {
    Success { value: f64 },
    Failure { message: String },
}

impl EvaluationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The computed value, if evaluation succeeded.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value } => Some(*value),
            Self::Failure { .. } => None,
        }
    }

    /// The failure message, if evaluation failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}

impl From<Result<f64, EvaluationError>> for EvaluationResult {
    fn from(result: Result<f64, EvaluationError>) -> Self {
        match result {
            Ok(value) => Self::Success { value },
            Err(error) => Self::Failure {
                message: error.to_string(),
            },
        }
    }
}

/// Evaluate a request.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{evaluate, EvaluationError, EvaluationRequest, Operation};
///
/// let request = EvaluationRequest::new(Operation::Power, 2.0, Some(10.0)).unwrap();
/// assert_eq!(evaluate(&request), Ok(1024.0));
///
/// let request = EvaluationRequest::new(Operation::Divide, 1.0, Some(0.0)).unwrap();
/// assert_eq!(evaluate(&request), Err(EvaluationError::DivisionByZero));
/// ```
pub fn evaluate(request: &EvaluationRequest) -> Result<f64, EvaluationError> {
    let a = request.operand_a;

    match request.operation {
        Operation::Add => Ok(a + request.second()?),
        Operation::Subtract => Ok(a - request.second()?),
        Operation::Multiply => Ok(a * request.second()?),
        Operation::Divide => {
            let b = request.second()?;
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            Ok(a / b)
        }
        Operation::Power => Ok(a.powf(request.second()?)),
        Operation::SquareRoot => {
            if a < 0.0 {
                return Err(EvaluationError::NegativeSquareRoot);
            }
            Ok(a.sqrt())
        }
        Operation::Log10 => {
            if a <= 0.0 {
                return Err(EvaluationError::NonPositiveLogarithm);
            }
            Ok(a.log10())
        }
        Operation::Factorial => factorial(a),
    }
}

/// Evaluate by selector key, the contract the UI layer speaks.
///
/// # Example
///
/// ```rust
/// use calcbook::core::evaluate_key;
///
/// assert_eq!(evaluate_key("add", 2.0, Some(3.0)), Ok(5.0));
/// assert_eq!(
///     evaluate_key("modulo", 2.0, Some(3.0)).unwrap_err().to_string(),
///     "unsupported operation"
/// );
/// ```
pub fn evaluate_key(
    key: &str,
    operand_a: f64,
    operand_b: Option<f64>,
) -> Result<f64, EvaluationError> {
    let operation: Operation = key.parse()?;
    let request = EvaluationRequest::new(operation, operand_a, operand_b)?;
    evaluate(&request)
}

fn factorial(a: f64) -> Result<f64, EvaluationError> {
    if a < 0.0 {
        return Err(EvaluationError::NegativeFactorial);
    }
    // Exact equality: NaN, infinity and anything with a fractional part fail here
    if !a.is_finite() || a != a.trunc() {
        return Err(EvaluationError::FractionalFactorial);
    }
    if a > MAX_FACTORIAL_ARGUMENT {
        return Err(EvaluationError::FactorialOverflow);
    }

    Ok(exact_factorial(a as u32))
}

/// n! computed exactly, then rounded to the nearest `f64` once.
fn exact_factorial(n: u32) -> f64 {
    // Little-endian base 2^32 limbs
    let mut limbs: Vec<u32> = vec![1];
    for factor in 2..=u64::from(n) {
        let mut carry = 0u64;
        for limb in limbs.iter_mut() {
            let product = u64::from(*limb) * factor + carry;
            *limb = product as u32;
            carry = product >> 32;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
    }
    limbs_to_f64(&limbs)
}

/// Round a little-endian limb integer to the nearest `f64`, ties to even.
fn limbs_to_f64(limbs: &[u32]) -> f64 {
    let Some(&top) = limbs.last() else {
        return 0.0;
    };
    let bits = (limbs.len() - 1) * 32 + (32 - top.leading_zeros() as usize);

    if bits <= 64 {
        let value = limbs
            .iter()
            .rev()
            .fold(0u64, |acc, &limb| (acc << 32) | u64::from(limb));
        return value as f64;
    }

    // Keep the top 64 bits; anything below them only matters as a sticky bit
    let shift = bits - 64;
    let low_limb = shift / 32;
    let high_limb = (low_limb + 2).min(limbs.len() - 1);
    let window = limbs[low_limb..=high_limb]
        .iter()
        .rev()
        .fold(0u128, |acc, &limb| (acc << 32) | u128::from(limb));
    let mut mantissa = (window >> (shift % 32)) as u64;

    let dropped_mask = (1u32 << (shift % 32)).wrapping_sub(1);
    let sticky = limbs[..low_limb].iter().any(|&limb| limb != 0)
        || limbs[low_limb] & dropped_mask != 0;
    if sticky {
        mantissa |= 1;
    }

    // The u64 conversion rounds to nearest even; scaling by 2^shift is exact
    let scale = f64::from_bits((shift as u64 + 1023) << 52);
    mantissa as f64 * scale
}
