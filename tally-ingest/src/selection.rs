//! Picking the ledger tables out of everything the extractor found.

use serde::{Deserialize, Serialize};
use tally_core::{NormalizeError, RawTable};
use tracing::trace;

/// Which tables form the transaction ledger.
///
/// Both numbers are calibration for one bank's layout, not general rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSelection {
    /// Summary/header tables before the ledger
    pub leading_tables: usize,
    /// Trailing tables with exactly this many columns are footers
    pub footer_columns: Option<usize>,
}

impl TableSelection {
    /// The ledger tables, in document order.
    pub fn ledger<'a>(&self, tables: &'a [RawTable]) -> &'a [RawTable] {
        let mut ledger = tables.get(self.leading_tables..).unwrap_or(&[]);
        if let Some(footer) = self.footer_columns {
            while let Some((last, rest)) = ledger.split_last() {
                if last.num_columns() != footer {
                    break;
                }
                trace!(columns = footer, rows = last.num_rows(), "dropping trailing footer table");
                ledger = rest;
            }
        }
        ledger
    }

    /// Ledger tables stacked into one table; page breaks disappear.
    pub fn select(&self, tables: &[RawTable]) -> Result<RawTable, NormalizeError> {
        let ledger = self.ledger(tables);
        if ledger.is_empty() {
            return Err(NormalizeError::NoLedgerTables);
        }
        Ok(RawTable::concat(ledger))
    }
}
