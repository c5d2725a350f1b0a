//! Two-step currency conversion over the rate table
//!
//! Conversion always goes through the base currency:
//! `base_amount = amount / rate[source]`, `result = base_amount * rate[target]`.

use crate::currency::CurrencyCode;
use crate::error::{ValidationError, ValidationResult};
use crate::rates::{RateTable, BASE_CURRENCY};
use crate::types::{Amount, Rate, RESULT_DECIMALS};
use serde::Serialize;
use std::fmt;

/// Result of a conversion: echoed input plus the converted amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub amount: Amount,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub result: Amount,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$} {} = {:.prec$} {}",
            self.amount,
            self.from,
            self.result,
            self.to,
            prec = RESULT_DECIMALS
        )
    }
}

/// Confirmation for a successful rate edit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateUpdate {
    pub code: CurrencyCode,
    pub rate: Rate,
    /// True when the edit introduced a new code
    pub is_new: bool,
}

impl fmt::Display for RateUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rate updated: 1 {} = {} {}",
            BASE_CURRENCY, self.rate, self.code
        )
    }
}

/// Convert an amount between two currencies via the base currency
///
/// Negative amounts are not rejected; both codes must be in the table.
pub fn convert_amount(
    table: &RateTable,
    amount: Amount,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> ValidationResult<Amount> {
    let from_rate = table.rate(from)?;
    let to_rate = table.rate(to)?;
    let base_amount = amount / from_rate;
    Ok(base_amount * to_rate)
}

/// Edit the rate table from raw (code, rate) strings
///
/// Normalizes the code, parses the rate, and delegates validation to
/// [`RateTable::set_rate`]. Nothing is mutated on any error path.
pub fn edit_rate(table: &mut RateTable, code: &str, rate: &str) -> ValidationResult<RateUpdate> {
    let code = CurrencyCode::parse(code)?;
    let rate: Rate = rate
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidRate(rate.to_string()))?;
    let is_new = !table.contains(&code);
    table.set_rate(code.clone(), rate)?;
    Ok(RateUpdate { code, rate, is_new })
}

/// Converter selection state: the currently chosen source and target codes
///
/// Pure selection state; the rate table is injected into each operation so
/// conversion and rate editing stay independently testable.
#[derive(Debug, Clone)]
pub struct Converter {
    source: CurrencyCode,
    target: CurrencyCode,
}

impl Converter {
    /// Create with the default selections (USD -> INR)
    pub fn new() -> Self {
        Self {
            source: CurrencyCode::parse("USD").expect("default code is valid"),
            target: CurrencyCode::parse("INR").expect("default code is valid"),
        }
    }

    /// Currently selected source code
    pub fn source(&self) -> &CurrencyCode {
        &self.source
    }

    /// Currently selected target code
    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    /// Select the source currency
    pub fn select_source(&mut self, code: CurrencyCode) {
        self.source = code;
    }

    /// Select the target currency
    pub fn select_target(&mut self, code: CurrencyCode) {
        self.target = code;
    }

    /// Exchange source and target selections; no recomputation happens
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    /// Convert a raw amount string between the selected currencies
    pub fn convert(&self, table: &RateTable, amount: &str) -> ValidationResult<Conversion> {
        let amount: Amount = amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidAmount(amount.to_string()))?;
        let result = convert_amount(table, amount, &self.source, &self.target)?;
        log::debug!(
            "converted {} {} -> {} {}",
            amount,
            self.source,
            result,
            self.target
        );
        Ok(Conversion {
            amount,
            from: self.source.clone(),
            to: self.target.clone(),
            result,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
