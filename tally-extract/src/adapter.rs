use std::path::Path;

use tally_core::ExtractionResult;
use tracing::info;

use crate::config::ExtractionConfig;
use crate::converter::{DoclingCliConverter, DocumentConverter};
use crate::error::ExtractionError;

/// Configured, reusable front door to the converter.
///
/// Holds no per-document state: every `extract` call is independent.
#[derive(Debug, Clone)]
pub struct ExtractionAdapter<C = DoclingCliConverter> {
    converter: C,
}

impl ExtractionAdapter<DoclingCliConverter> {
    pub fn docling(config: ExtractionConfig) -> Self {
        Self::new(DoclingCliConverter::new(config))
    }
}

impl Default for ExtractionAdapter<DoclingCliConverter> {
    fn default() -> Self {
        Self::docling(ExtractionConfig::default())
    }
}

impl<C: DocumentConverter> ExtractionAdapter<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Convert `source` and return its tables in document order.
    ///
    /// A document without tables is a valid, empty result.
    pub fn extract(&self, source: &Path) -> Result<ExtractionResult, ExtractionError> {
        let document = self.converter.convert(source)?;
        let result = document.into_extraction(source);
        info!(
            source = %source.display(),
            tables = result.table_count(),
            pages = ?result.metadata.page_count,
            "extracted tables"
        );
        Ok(result)
    }
}
