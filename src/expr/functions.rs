//! Allow-listed math functions and constants
//!
//! The evaluator exposes only these names. Anything else is an unknown-name
//! error, which keeps arbitrary identifiers out of the grammar entirely.

use crate::error::{EvalError, EvalResult};
use std::f64::consts;

/// Look up a named constant (lowercased)
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        "tau" => Some(consts::TAU),
        _ => None,
    }
}

/// Apply a named function to its arguments (name lowercased)
///
/// Returns an unknown-name error for names outside the allow-list and a
/// parse error on wrong arity.
pub fn apply(name: &str, args: &[f64]) -> EvalResult<f64> {
    let value = match (name, args) {
        ("sqrt", [x]) => x.sqrt(),
        ("cbrt", [x]) => x.cbrt(),
        ("exp", [x]) => x.exp(),
        ("ln", [x]) => x.ln(),
        // log follows the math-library convention: natural log, or an
        // explicit base as the second argument
        ("log", [x]) => x.ln(),
        ("log", [x, base]) => x.log(*base),
        ("log10", [x]) => x.log10(),
        ("log2", [x]) => x.log2(),
        ("sin", [x]) => x.sin(),
        ("cos", [x]) => x.cos(),
        ("tan", [x]) => x.tan(),
        ("asin", [x]) => x.asin(),
        ("acos", [x]) => x.acos(),
        ("atan", [x]) => x.atan(),
        ("sinh", [x]) => x.sinh(),
        ("cosh", [x]) => x.cosh(),
        ("tanh", [x]) => x.tanh(),
        ("asinh", [x]) => x.asinh(),
        ("acosh", [x]) => x.acosh(),
        ("atanh", [x]) => x.atanh(),
        ("abs" | "fabs", [x]) => x.abs(),
        ("floor", [x]) => x.floor(),
        ("ceil", [x]) => x.ceil(),
        ("round", [x]) => x.round(),
        ("trunc", [x]) => x.trunc(),
        ("signum", [x]) => x.signum(),
        ("degrees", [x]) => x.to_degrees(),
        ("radians", [x]) => x.to_radians(),
        ("atan2", [y, x]) => y.atan2(*x),
        ("pow", [x, y]) => x.powf(*y),
        ("hypot", [x, y]) => x.hypot(*y),
        ("fmod", [x, y]) => x % y,
        _ if is_function(name) => {
            return Err(EvalError::Parse(format!(
                "wrong number of arguments for {}",
                name
            )));
        }
        _ => return Err(EvalError::UnknownName(name.to_string())),
    };
    Ok(value)
}

/// Check whether a name is in the function allow-list
pub fn is_function(name: &str) -> bool {
    matches!(
        name,
        "sqrt"
            | "cbrt"
            | "exp"
            | "ln"
            | "log"
            | "log10"
            | "log2"
            | "sin"
            | "cos"
            | "tan"
            | "asin"
            | "acos"
            | "atan"
            | "sinh"
            | "cosh"
            | "tanh"
            | "asinh"
            | "acosh"
            | "atanh"
            | "abs"
            | "fabs"
            | "floor"
            | "ceil"
            | "round"
            | "trunc"
            | "signum"
            | "degrees"
            | "radians"
            | "atan2"
            | "pow"
            | "hypot"
            | "fmod"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unary_functions() {
        assert_eq!(apply("sqrt", &[9.0]).unwrap(), 3.0);
        assert_eq!(apply("abs", &[-4.0]).unwrap(), 4.0);
        assert_relative_eq!(apply("sin", &[consts::PI / 2.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_binary_functions() {
        assert_eq!(apply("pow", &[2.0, 10.0]).unwrap(), 1024.0);
        assert_eq!(apply("hypot", &[3.0, 4.0]).unwrap(), 5.0);
        assert_relative_eq!(apply("log", &[8.0, 2.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_wrong_arity() {
        assert!(matches!(
            apply("sqrt", &[1.0, 2.0]),
            Err(EvalError::Parse(_))
        ));
        assert!(matches!(apply("pow", &[1.0]), Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            apply("system", &[1.0]),
            Err(EvalError::UnknownName(_))
        ));
    }

    #[test]
    fn test_constants() {
        assert_eq!(constant("pi"), Some(consts::PI));
        assert_eq!(constant("e"), Some(consts::E));
        assert_eq!(constant("nope"), None);
    }
}
