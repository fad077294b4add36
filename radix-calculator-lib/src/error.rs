use thiserror::Error;

/// The distinct failure kinds an evaluation can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An arithmetic result or a numeral left the signed 64-bit range,
    /// or base conversion corrupted the expression.
    #[error("arithmetic overflow")]
    Overflow,
    /// A literal `/0` in the input, or a division whose divisor evaluated to zero.
    #[error("division by zero")]
    DivideByZero,
    /// A malformed expression, base marker, digit, or operator arrangement.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// An exponent below zero, written literally or computed.
    #[error("negative exponent")]
    NegativeExponent,
    /// An evaluation stack grew past its capacity.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
}

impl EvalError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        EvalError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
