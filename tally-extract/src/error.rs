use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// The converter could not process a document. Never retried here.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("source document not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("unsupported extraction setting: {0}")]
    UnsupportedConfig(&'static str),

    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}. stderr: {stderr}")]
    ConverterFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("converter produced no output at {}", .0.display())]
    MissingOutput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
