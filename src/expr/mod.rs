//! Expression sanitization and evaluation
//!
//! Turns a raw calculator buffer into a number: the sanitizer expands the
//! custom notations (`√`, `<number>%`), then a tokenizer and recursive-
//! descent parser evaluate the result over a closed grammar of numbers,
//! `+ - * / ^`, parentheses, and an allow-list of math functions and
//! constants. There is no dynamic evaluation and no name outside the
//! allow-list.
//!
//! # Example
//!
//! ```rust
//! use calcfx::expr::evaluate;
//!
//! assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
//! assert_eq!(evaluate("10+50%").unwrap(), 10.5);
//! assert_eq!(evaluate("√9)").unwrap(), 3.0);
//! assert!(evaluate("√9").is_err()); // unclosed paren is not repaired
//! ```

pub mod functions;
pub mod parser;
pub mod sanitize;
pub mod token;

pub use parser::Parser;
pub use token::{tokenize, Token};

use crate::error::{EvalError, EvalResult};

/// Sanitize and evaluate a raw expression string
///
/// Non-finite results (overflow, domain failures like `sqrt(-1)`) are
/// reported as domain errors rather than surfacing `inf`/`NaN`.
pub fn evaluate(raw: &str) -> EvalResult<f64> {
    let cleaned = sanitize::sanitize(raw);
    log::debug!("evaluating {:?} (from {:?})", cleaned, raw);
    let tokens = token::tokenize(&cleaned)?;
    let value = Parser::new(tokens).parse()?;
    if !value.is_finite() {
        return Err(EvalError::Domain);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_end_to_end() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("2^3").unwrap(), 8.0);
        assert_eq!(evaluate("50%").unwrap(), 0.5);
        assert_eq!(evaluate("10+50%").unwrap(), 10.5);
        assert_eq!(evaluate("√9)").unwrap(), 3.0);
    }

    #[test]
    fn test_unclosed_sqrt_fails() {
        assert!(matches!(evaluate("√9"), Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(evaluate("√-1)"), Err(EvalError::Domain));
        assert_eq!(evaluate("ln(0)"), Err(EvalError::Domain));
        // overflow surfaces as a domain error, not as inf
        assert_eq!(evaluate("10^400"), Err(EvalError::Domain));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("1/0"), Err(EvalError::DivisionByZero));
    }
}
