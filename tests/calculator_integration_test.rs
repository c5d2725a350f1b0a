//! Integration tests for the calculator unit
//!
//! Drives the buffer state machine the way a presentation shell would.

use calcfx::prelude::*;

#[test]
fn test_infix_arithmetic_semantics() {
    let cases = [
        ("2+3*4", "14"),
        ("(2+3)*4", "20"),
        ("100/4-5", "20"),
        ("2*3+4*5", "26"),
        ("1+2-3+4", "4"),
    ];
    for (input, expected) in cases {
        let mut calc = Calculator::new();
        calc.push(input);
        assert_eq!(calc.evaluate(), expected, "input: {}", input);
    }
}

#[test]
fn test_percent_binds_to_its_own_number() {
    let mut calc = Calculator::new();
    calc.push("50%");
    assert_eq!(calc.evaluate(), "0.5");

    calc.clear();
    calc.push("10+50%");
    assert_eq!(calc.evaluate(), "10.5");
}

#[test]
fn test_caret_is_power() {
    let mut calc = Calculator::new();
    calc.push("2^3");
    assert_eq!(calc.evaluate(), "8");
}

#[test]
fn test_sqrt_requires_explicit_close() {
    let mut calc = Calculator::new();
    calc.push("√9)");
    assert_eq!(calc.evaluate(), "3");

    calc.clear();
    calc.push("√9");
    assert_eq!(calc.evaluate(), ERROR_MARKER);
    assert_eq!(calc.buffer(), "");
}

#[test]
fn test_clear_actions() {
    let mut calc = Calculator::new();
    calc.push("12+3");
    calc.backspace();
    assert_eq!(calc.buffer(), "12+");

    calc.clear();
    assert_eq!(calc.buffer(), "");
}

#[test]
fn test_error_then_fresh_input() {
    let mut calc = Calculator::new();
    calc.push("2+");
    assert_eq!(calc.evaluate(), ERROR_MARKER);

    // next keypress starts a fresh expression, not "Error..."
    calc.push("7");
    assert_eq!(calc.evaluate(), "7");
}

#[test]
fn test_named_functions_and_constants() {
    let mut calc = Calculator::new();
    calc.push("abs(-3)+floor(1.9)");
    assert_eq!(calc.evaluate(), "4");

    calc.clear();
    calc.push("cos(0)*2");
    assert_eq!(calc.evaluate(), "2");

    calc.clear();
    calc.push("round(pi)");
    assert_eq!(calc.evaluate(), "3");
}

#[test]
fn test_disallowed_names_fail() {
    for input in ["import(1)", "x+1", "open(1)", "__foo__"] {
        let mut calc = Calculator::new();
        calc.push(input);
        assert_eq!(calc.evaluate(), ERROR_MARKER, "input: {}", input);
    }
}
