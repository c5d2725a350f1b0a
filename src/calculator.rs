//! Calculator buffer state machine
//!
//! A single mutable string buffer driven by logical key presses. Evaluation
//! replaces the buffer with its own result, or clears it and reports the
//! fixed error marker. The machine is flat: every action lands back in an
//! editable buffer.

use crate::expr;
use crate::types::ERROR_MARKER;

/// Calculator input/output buffer
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    buffer: String,
}

impl Calculator {
    /// Create with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Append a literal token (digit, operator, paren, `.`, `%`, `√`, `^`)
    pub fn push(&mut self, token: &str) {
        self.buffer.push_str(token);
    }

    /// Clear-all; also serves as the cancel action
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Clear-last: drop the final character
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Run the evaluation pipeline and return the display string
    ///
    /// An empty (or whitespace-only) buffer is a no-op. On success the
    /// buffer becomes the canonical string form of the result; on any
    /// failure the buffer resets to empty and the error marker is returned.
    pub fn evaluate(&mut self) -> String {
        if self.buffer.trim().is_empty() {
            return self.buffer.clone();
        }
        match expr::evaluate(&self.buffer) {
            Ok(value) => {
                self.buffer = format_result(value);
                self.buffer.clone()
            }
            Err(err) => {
                log::warn!("evaluation failed for {:?}: {}", self.buffer, err);
                self.buffer.clear();
                ERROR_MARKER.to_string()
            }
        }
    }
}

/// Canonical display form of a numeric result (`14`, `10.5`)
pub fn format_result(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_actions() {
        let mut calc = Calculator::new();
        calc.push("1");
        calc.push("2");
        calc.push("+");
        calc.push("3");
        assert_eq!(calc.buffer(), "12+3");

        calc.backspace();
        assert_eq!(calc.buffer(), "12+");

        calc.clear();
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut calc = Calculator::new();
        calc.backspace();
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_evaluate_replaces_buffer() {
        let mut calc = Calculator::new();
        calc.push("2+3*4");
        assert_eq!(calc.evaluate(), "14");
        assert_eq!(calc.buffer(), "14");

        // result can be built on further
        calc.push("*2");
        assert_eq!(calc.evaluate(), "28");
    }

    #[test]
    fn test_evaluate_error_resets_buffer() {
        let mut calc = Calculator::new();
        calc.push("√9");
        assert_eq!(calc.evaluate(), ERROR_MARKER);
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_evaluate_empty_is_noop() {
        let mut calc = Calculator::new();
        assert_eq!(calc.evaluate(), "");
        calc.push("   ");
        assert_eq!(calc.evaluate(), "   ");
    }

    #[test]
    fn test_custom_notation_keys() {
        let mut calc = Calculator::new();
        calc.push("√");
        calc.push("9");
        calc.push(")");
        assert_eq!(calc.evaluate(), "3");

        calc.clear();
        calc.push("2");
        calc.push("^");
        calc.push("3");
        assert_eq!(calc.evaluate(), "8");

        calc.clear();
        calc.push("10+50%");
        assert_eq!(calc.evaluate(), "10.5");
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(14.0), "14");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(-3.25), "-3.25");
    }
}
