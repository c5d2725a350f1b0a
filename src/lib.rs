//! # calcfx
//!
//! An arithmetic expression calculator and a manual-rate currency converter,
//! as a library of pure operations for a thin presentation shell to drive.
//!
//! The two units are independent: the calculator owns a single string buffer
//! and evaluates it over a closed grammar; the converter performs two-step
//! conversion (source -> base -> target) against a session-scoped rate
//! table. All state is in memory and resets each run.
//!
//! ## Example
//!
//! ```rust
//! use calcfx::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.push("10+50%");
//! assert_eq!(calc.evaluate(), "10.5");
//!
//! let table = RateTable::new();
//! let conv = Converter::new().convert(&table, "100").unwrap();
//! assert_eq!(conv.to_string(), "100.0000 USD = 8320.0000 INR");
//! ```

pub mod calculator;
pub mod converter;
pub mod currency;
pub mod error;
pub mod expr;
pub mod rates;
pub mod types;

pub mod prelude {
    //! Commonly used types and operations
    pub use crate::calculator::Calculator;
    pub use crate::converter::{convert_amount, edit_rate, Conversion, Converter, RateUpdate};
    pub use crate::currency::CurrencyCode;
    pub use crate::error::{EvalError, EvalResult, ValidationError, ValidationResult};
    pub use crate::rates::{RateTable, BASE_CURRENCY};
    pub use crate::types::*;
}
