//! tally-ingest: bank-specific rules that turn raw statement tables into a canonical ledger.

pub mod amount;
pub mod banks;
pub mod dates;
pub mod normalizer;
pub mod pipeline;
pub mod selection;

pub use amount::AmountEncoding;
pub use banks::{Bank, NormalizerRegistry};
pub use normalizer::{BankNormalizer, LedgerRules, RuleBasedNormalizer};
pub use pipeline::{StatementError, StatementParser};
pub use selection::TableSelection;
