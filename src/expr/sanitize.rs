//! Textual sanitization applied before tokenizing
//!
//! Ordered substitutions over the raw buffer:
//!
//! 1. `√` becomes the literal `sqrt(`, deliberately without auto-closing,
//!    so `√9` fails at parse time while `√9)` evaluates.
//! 2. `<number>%` becomes `(<number>/100)` when the number is not preceded
//!    by a word character, so the percent binds to its own number only.
//!
//! The caret needs no rewriting: `^` is the power operator of the grammar.

use regex::Regex;
use std::sync::OnceLock;

/// Square-root key symbol as it arrives from the shell
pub const SQRT_SYMBOL: char = '√';

fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?%").expect("percent pattern is valid"))
}

/// Run the full sanitization pipeline
pub fn sanitize(raw: &str) -> String {
    rewrite_percent(&expand_sqrt(raw))
}

/// Expand every `√` into `sqrt(`
pub fn expand_sqrt(s: &str) -> String {
    s.replace(SQRT_SYMBOL, "sqrt(")
}

/// Rewrite `<number>%` into `(<number>/100)`
///
/// The regex crate has no look-behind, so the "not preceded by a word
/// character" guard is a manual check on the byte before each match.
pub fn rewrite_percent(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for m in percent_re().find_iter(s) {
        let preceded_by_word = s[..m.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        out.push_str(&s[last..m.start()]);
        if preceded_by_word {
            out.push_str(m.as_str());
        } else {
            let number = &m.as_str()[..m.as_str().len() - 1];
            out.push('(');
            out.push_str(number);
            out.push_str("/100)");
        }
        last = m.end();
    }
    out.push_str(&s[last..]);
    out
}
