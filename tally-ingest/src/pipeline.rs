//! PDF in, canonical statement out.

use std::path::Path;

use tally_core::{NormalizationParameters, NormalizeError, RawTable, Statement};
use tally_extract::{
    DoclingCliConverter, DocumentConverter, ExtractionAdapter, ExtractionConfig, ExtractionError,
};
use thiserror::Error;
use tracing::info;

use crate::banks::Bank;
use crate::normalizer::BankNormalizer;

#[derive(Error, Debug)]
pub enum StatementError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// One bank's extraction + normalization, reusable across documents.
pub struct StatementParser<C = DoclingCliConverter> {
    adapter: ExtractionAdapter<C>,
    normalizer: Box<dyn BankNormalizer>,
}

impl StatementParser<DoclingCliConverter> {
    /// Parser for a built-in bank using the Docling CLI.
    pub fn for_bank(bank: Bank, config: ExtractionConfig) -> Self {
        Self::new(ExtractionAdapter::docling(config), bank.normalizer())
    }
}

impl<C: DocumentConverter> StatementParser<C> {
    pub fn new(adapter: ExtractionAdapter<C>, normalizer: Box<dyn BankNormalizer>) -> Self {
        Self { adapter, normalizer }
    }

    pub fn adapter(&self) -> &ExtractionAdapter<C> {
        &self.adapter
    }

    pub fn normalizer(&self) -> &dyn BankNormalizer {
        &*self.normalizer
    }

    /// Raw tables of `source`, in document order.
    pub fn get_tables(&self, source: &Path) -> Result<Vec<RawTable>, StatementError> {
        Ok(self.adapter.extract(source)?.tables)
    }

    /// Extract and normalize one statement.
    ///
    /// Parameters are checked before the (slow) extraction runs.
    pub fn get_statement(
        &self,
        source: &Path,
        params: &NormalizationParameters,
    ) -> Result<Option<Statement>, StatementError> {
        self.normalizer.validate_parameters(params)?;

        let extraction = self.adapter.extract(source)?;
        let statement = self.normalizer.normalize(&extraction.tables, params)?;

        info!(
            bank = self.normalizer.name(),
            source = %source.display(),
            rows = statement.as_ref().map(Statement::len),
            "statement parsed"
        );
        Ok(statement)
    }
}
