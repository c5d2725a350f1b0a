//! Core types and constants

/// Exchange rate: units of a currency per 1 unit of the base currency
pub type Rate = f64;

/// Monetary amount
pub type Amount = f64;

/// Fixed marker displayed when expression evaluation fails
pub const ERROR_MARKER: &str = "Error";

/// Decimal places used when echoing conversion amounts
pub const RESULT_DECIMALS: usize = 4;
