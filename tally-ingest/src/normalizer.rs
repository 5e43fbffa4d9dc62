//! Bank normalizers: raw tables in, canonical statement out.
//!
//! Per call the work moves through
//!   select ledger tables → assign columns → resolve amount → parse dates
//! and stops at the first failure. Nothing partial is ever returned.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_core::{NormalizationParameters, NormalizeError, RawTable, Statement, StatementRow};
use tracing::{debug, trace, warn};

use crate::amount::AmountEncoding;
use crate::dates::parse_with_year;
use crate::selection::TableSelection;

/// Column layout every ledger is mapped onto: date text, description, then
/// one or more amount candidates.
const DATE_COL: usize = 0;
const DESCRIPTION_COL: usize = 1;
const FIRST_AMOUNT_COL: usize = 2;

pub trait BankNormalizer {
    /// Registry key, e.g. "sainsburys"
    fn name(&self) -> &str;

    /// Parameters that must be present before any table is looked at.
    fn required_parameters(&self) -> &[&'static str] {
        &["year"]
    }

    fn validate_parameters(&self, params: &NormalizationParameters) -> Result<(), NormalizeError> {
        require_all(self.required_parameters(), params)
    }

    /// Pick the ledger tables and stack them into one.
    fn select_ledger_tables(&self, tables: &[RawTable]) -> Result<RawTable, NormalizeError>;

    /// Map the stacked ledger onto `(timestamp, description, amount)`.
    fn map_to_canonical(
        &self,
        ledger: &RawTable,
        params: &NormalizationParameters,
    ) -> Result<Statement, NormalizeError>;

    /// Full normalization.
    ///
    /// `Ok(None)` means no amount column could be parsed and the caller asked
    /// for lenient mode; strict mode gets `NormalizeError::UnparseableAmount`.
    fn normalize(
        &self,
        tables: &[RawTable],
        params: &NormalizationParameters,
    ) -> Result<Option<Statement>, NormalizeError> {
        self.validate_parameters(params)?;

        debug!(bank = self.name(), tables = tables.len(), "selecting ledger tables");
        let ledger = self.select_ledger_tables(tables)?;

        match self.map_to_canonical(&ledger, params) {
            Ok(statement) => {
                debug!(bank = self.name(), rows = statement.len(), "statement normalized");
                Ok(Some(statement))
            }
            Err(NormalizeError::UnparseableAmount) if !params.is_strict() => {
                warn!(bank = self.name(), "no amount column parsed; returning no statement");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn require_all(names: &[&'static str], params: &NormalizationParameters) -> Result<(), NormalizeError> {
    for &name in names {
        params.require(name)?;
    }
    Ok(())
}

/// Everything that differs between banks whose statements share the
/// date/description/amount layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRules {
    pub name: String,
    /// Currency of every amount, e.g. "GBP"
    pub currency: String,
    pub selection: TableSelection,
    pub amount: AmountEncoding,
    /// chrono format for "<row date text> <year>"
    pub date_format: String,
}

/// A `BankNormalizer` driven entirely by `LedgerRules`.
#[derive(Debug, Clone)]
pub struct RuleBasedNormalizer {
    rules: LedgerRules,
}

impl RuleBasedNormalizer {
    pub fn new(rules: LedgerRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &LedgerRules {
        &self.rules
    }

    /// First candidate column, left to right, whose every cell parses.
    fn resolve_amount(&self, ledger: &RawTable) -> Result<Vec<Decimal>, NormalizeError> {
        for col in FIRST_AMOUNT_COL..ledger.num_columns() {
            match self.rules.amount.parse_column(ledger.column(col)) {
                Some(amounts) => {
                    debug!(column = col, header = ?ledger.headers.get(col), "amount column resolved");
                    return Ok(amounts);
                }
                None => trace!(column = col, "amount candidate did not parse; dropping"),
            }
        }
        Err(NormalizeError::UnparseableAmount)
    }
}

impl BankNormalizer for RuleBasedNormalizer {
    fn name(&self) -> &str {
        &self.rules.name
    }

    fn validate_parameters(&self, params: &NormalizationParameters) -> Result<(), NormalizeError> {
        require_all(self.required_parameters(), params)?;
        params.year().map(|_| ())
    }

    fn select_ledger_tables(&self, tables: &[RawTable]) -> Result<RawTable, NormalizeError> {
        self.rules.selection.select(tables)
    }

    fn map_to_canonical(
        &self,
        ledger: &RawTable,
        params: &NormalizationParameters,
    ) -> Result<Statement, NormalizeError> {
        let year = params.year()?;

        if ledger.num_columns() <= FIRST_AMOUNT_COL {
            return Err(NormalizeError::NoLedgerTables);
        }
        trace!(
            candidates = ledger.num_columns() - FIRST_AMOUNT_COL,
            rows = ledger.num_rows(),
            "assigned ledger columns"
        );

        let amounts = self.resolve_amount(ledger)?;

        let rows = amounts
            .into_iter()
            .enumerate()
            .map(|(i, amount)| -> Result<StatementRow, NormalizeError> {
                Ok(StatementRow {
                    timestamp: parse_with_year(ledger.cell(i, DATE_COL), year, &self.rules.date_format)?,
                    description: ledger.cell(i, DESCRIPTION_COL).trim().to_string(),
                    amount,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Statement::new(self.rules.currency.clone(), rows))
    }
}
