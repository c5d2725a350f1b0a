//! Currency code handling

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Uppercase currency code (e.g. "USD", "INR")
///
/// Codes are open-ended rather than a closed ISO list: rate edits may
/// introduce new codes during a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse a user-supplied code: trim and uppercase, reject anything
    /// empty or non-alphanumeric
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let code = raw.trim().to_uppercase();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidCode(raw.to_string()));
        }
        Ok(Self(code))
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
