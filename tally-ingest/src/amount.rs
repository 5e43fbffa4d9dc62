//! Amount text → signed decimal, per bank encoding.
//!
//! Sign convention: debits are positive, credits negative. A bank that marks
//! credits with a trailing token (e.g. "1,000.00 CR") has that token stripped
//! and the parsed value negated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountEncoding {
    /// Trailing token marking a credit, e.g. "CR"
    pub credit_marker: Option<String>,
    /// Grouping character removed before parsing, e.g. ','
    pub thousands_separator: Option<char>,
    pub decimal_separator: char,
}

impl Default for AmountEncoding {
    fn default() -> Self {
        Self {
            credit_marker: None,
            thousands_separator: Some(','),
            decimal_separator: '.',
        }
    }
}

impl AmountEncoding {
    /// Parse one cell. Empty or non-numeric text gives `None`.
    pub fn parse(&self, text: &str) -> Option<Decimal> {
        let mut s = text.trim();
        let mut credit = false;
        if let Some(marker) = self.credit_marker.as_deref().filter(|m| !m.is_empty()) {
            if let Some(rest) = s.strip_suffix(marker) {
                s = rest.trim_end();
                credit = true;
            }
        }

        let mut cleaned = String::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match c {
                '-' | '+' if i == 0 => cleaned.push(c),
                c if c.is_ascii_digit() => cleaned.push(c),
                c if Some(c) == self.thousands_separator => {}
                c if c == self.decimal_separator => cleaned.push('.'),
                _ => return None,
            }
        }
        if !cleaned.chars().any(|c| c.is_ascii_digit()) || cleaned.matches('.').count() > 1 {
            return None;
        }

        let value = Decimal::from_str(&cleaned).ok()?;
        Some(if credit { -value } else { value })
    }

    /// Parse a whole column; fails if any cell fails.
    pub fn parse_column<'a>(&self, cells: impl IntoIterator<Item = &'a str>) -> Option<Vec<Decimal>> {
        cells.into_iter().map(|c| self.parse(c)).collect()
    }
}
