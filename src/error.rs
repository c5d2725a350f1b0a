//! Error types for calcfx

use thiserror::Error;

/// Failure while sanitizing or evaluating an expression.
///
/// Recovered locally by the calculator: the buffer resets and the display
/// shows a fixed error marker. Never fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid expression: {0}")]
    Parse(String),

    #[error("Unknown name: {0}")]
    UnknownName(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Math domain error")]
    Domain,
}

/// Invalid input on the conversion or rate-edit paths.
///
/// No state mutation occurs when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid currency code: {0:?}")]
    InvalidCode(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid rate: {0}")]
    InvalidRate(String),
}

/// Result type alias for expression evaluation
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Result type alias for conversion and rate-edit operations
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
