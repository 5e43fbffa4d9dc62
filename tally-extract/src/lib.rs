//! tally-extract: turns a PDF into raw tables by driving an external document converter.

pub mod adapter;
pub mod config;
pub mod converter;
pub mod docling;
pub mod error;

pub use adapter::ExtractionAdapter;
pub use config::{DoclingSection, ExtractionConfig, TableMode, load_config, save_config};
pub use converter::{DoclingCliConverter, DocumentConverter};
pub use docling::{Document, TableItem};
pub use error::ExtractionError;
