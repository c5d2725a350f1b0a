//! Mutable in-memory rate table
//!
//! Stores rates as "units of currency per 1 unit of base currency". The base
//! currency is fixed and its rate pinned to 1.0. The table is seeded at
//! construction, mutated during the session, and never persisted.

use crate::currency::CurrencyCode;
use crate::error::{ValidationError, ValidationResult};
use crate::types::Rate;
use hashbrown::HashMap;

/// Base currency code; every rate in the table is expressed against it
pub const BASE_CURRENCY: &str = "USD";

/// Initial seed (rates per 1 USD)
const SEED_RATES: &[(&str, Rate)] = &[
    ("USD", 1.0),
    ("INR", 83.2),
    ("EUR", 0.92),
    ("GBP", 0.78),
    ("JPY", 141.5),
    ("AED", 3.67),
];

/// Rate table keyed by uppercase currency code
///
/// Entries are inserted or overwritten, never deleted. Every stored rate is
/// strictly positive; the base entry stays at 1.0.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, Rate>,
    base: CurrencyCode,
}

impl RateTable {
    /// Create a table seeded with the initial rate set
    pub fn new() -> Self {
        let mut rates = HashMap::new();
        for (code, rate) in SEED_RATES {
            let code = CurrencyCode::parse(code).expect("seed codes are valid");
            rates.insert(code, *rate);
        }
        let base = CurrencyCode::parse(BASE_CURRENCY).expect("base code is valid");
        Self { rates, base }
    }

    /// Base currency of the table
    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Look up the rate for a code
    pub fn rate(&self, code: &CurrencyCode) -> ValidationResult<Rate> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| ValidationError::UnknownCurrency(code.to_string()))
    }

    /// Check whether a code is present
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    /// Insert or overwrite a rate
    ///
    /// Rejects non-positive or non-finite rates. The base currency's rate is
    /// pinned at 1.0, so any other value for it is rejected as well.
    pub fn set_rate(&mut self, code: CurrencyCode, rate: Rate) -> ValidationResult<()> {
        if !rate.is_finite() || rate <= 0.0 {
            log::warn!("rejected rate {} for {}", rate, code);
            return Err(ValidationError::InvalidRate(rate.to_string()));
        }
        if code == self.base && rate != 1.0 {
            return Err(ValidationError::InvalidRate(format!(
                "{} is the base currency; its rate is fixed at 1.0",
                code
            )));
        }
        log::debug!("rate set: 1 {} = {} {}", self.base, rate, code);
        self.rates.insert(code, rate);
        Ok(())
    }

    /// All known codes, sorted (for selection lists)
    pub fn codes(&self) -> Vec<CurrencyCode> {
        let mut codes: Vec<CurrencyCode> = self.rates.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// All (code, rate) entries, sorted by code (the "rates per 1 USD" listing)
    pub fn entries(&self) -> Vec<(CurrencyCode, Rate)> {
        let mut entries: Vec<(CurrencyCode, Rate)> =
            self.rates.iter().map(|(c, r)| (c.clone(), *r)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Number of known currencies
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Check if the table is empty (never true for a seeded table)
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    #[test]
    fn test_seeded_table() {
        let table = RateTable::new();
        assert_eq!(table.len(), 6);
        assert_eq!(table.rate(&code("USD")).unwrap(), 1.0);
        assert_eq!(table.rate(&code("INR")).unwrap(), 83.2);
        assert_eq!(table.base().as_str(), "USD");
    }

    #[test]
    fn test_unknown_code() {
        let table = RateTable::new();
        let result = table.rate(&code("XYZ"));
        assert!(matches!(result, Err(ValidationError::UnknownCurrency(_))));
    }

    #[test]
    fn test_set_rate_inserts_and_overwrites() {
        let mut table = RateTable::new();

        table.set_rate(code("CHF"), 0.88).unwrap();
        assert_eq!(table.rate(&code("CHF")).unwrap(), 0.88);
        assert_eq!(table.len(), 7);

        table.set_rate(code("CHF"), 0.9).unwrap();
        assert_eq!(table.rate(&code("CHF")).unwrap(), 0.9);
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn test_set_rate_rejects_non_positive() {
        let mut table = RateTable::new();

        assert!(table.set_rate(code("CHF"), 0.0).is_err());
        assert!(table.set_rate(code("CHF"), -1.5).is_err());
        assert!(table.set_rate(code("CHF"), f64::NAN).is_err());
        assert!(!table.contains(&code("CHF")));
    }

    #[test]
    fn test_base_rate_pinned() {
        let mut table = RateTable::new();

        assert!(table.set_rate(code("USD"), 2.0).is_err());
        assert_eq!(table.rate(&code("USD")).unwrap(), 1.0);

        // Re-asserting 1.0 is allowed
        table.set_rate(code("USD"), 1.0).unwrap();
    }

    #[test]
    fn test_codes_sorted() {
        let table = RateTable::new();
        let codes = table.codes();
        let strs: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(strs, vec!["AED", "EUR", "GBP", "INR", "JPY", "USD"]);
    }

    #[test]
    fn test_entries_sorted() {
        let table = RateTable::new();
        let entries = table.entries();
        assert_eq!(entries[0].0.as_str(), "AED");
        assert_eq!(entries[0].1, 3.67);
        assert_eq!(entries.last().unwrap().0.as_str(), "USD");
    }
}
