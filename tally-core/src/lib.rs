//! tally-core: shared types for statement extraction and normalization

pub mod error;
pub mod params;
pub mod statement;
pub mod table;

pub use error::NormalizeError;
pub use params::{NormalizationParameters, ParseMode};
pub use statement::{Statement, StatementRow};
pub use table::{DocumentMetadata, ExtractionResult, RawTable};
