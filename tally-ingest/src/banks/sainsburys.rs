//! Sainsbury's Bank credit card statements.
//!
//! The PDF opens with two summary tables, then the transaction ledger split
//! across pages, then two-column footer tables (interest notes, disclaimers):
//!
//!   1 Jan     Coffee Shop      12.50
//!   2 Jan     Salary           1,000.00 CR
//!
//! Rows have no year, so callers must pass `year`.

use crate::amount::AmountEncoding;
use crate::normalizer::{LedgerRules, RuleBasedNormalizer};
use crate::selection::TableSelection;

pub const NAME: &str = "sainsburys";

pub fn rules() -> LedgerRules {
    LedgerRules {
        name: NAME.to_string(),
        currency: "GBP".to_string(),
        selection: TableSelection {
            leading_tables: 2,
            footer_columns: Some(2),
        },
        amount: AmountEncoding {
            credit_marker: Some("CR".to_string()),
            thousands_separator: Some(','),
            decimal_separator: '.',
        },
        date_format: "%d %B %Y".to_string(),
    }
}

pub fn normalizer() -> RuleBasedNormalizer {
    RuleBasedNormalizer::new(rules())
}
