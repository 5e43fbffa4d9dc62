//! Canonical statement output (bank-agnostic)

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One normalized transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    pub timestamp: NaiveDateTime,
    pub description: String,
    /// Positive means debit/spend; negative means credit.
    pub amount: Decimal,
}

/// A fully normalized ledger. Either every row parsed or there is no statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Base currency of `amount`, e.g. "GBP"
    pub currency: String,
    pub rows: Vec<StatementRow>,
}

impl Statement {
    pub fn new(currency: impl Into<String>, rows: Vec<StatementRow>) -> Self {
        Self {
            currency: currency.into(),
            rows,
        }
    }

    /// Column names of the tabular form: `DATETIME`, `DESCRIPTION`, `AMOUNT_<CCY>`.
    pub fn column_names(&self) -> [String; 3] {
        [
            "DATETIME".to_string(),
            "DESCRIPTION".to_string(),
            format!("AMOUNT_{}", self.currency),
        ]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all amounts (debits minus credits).
    pub fn net_amount(&self) -> Decimal {
        self.rows.iter().map(|r| r.amount).sum()
    }
}
