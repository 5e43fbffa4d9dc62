//! Document converters: anything that can turn a file into a `Document`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::config::ExtractionConfig;
use crate::docling::Document;
use crate::error::ExtractionError;

/// The external layout/table-detection collaborator.
pub trait DocumentConverter {
    fn convert(&self, source: &Path) -> Result<Document, ExtractionError>;
}

impl<C: DocumentConverter + ?Sized> DocumentConverter for Box<C> {
    fn convert(&self, source: &Path) -> Result<Document, ExtractionError> {
        (**self).convert(source)
    }
}

/// Runs the `docling` CLI and reads back the JSON document it writes.
///
/// Each call gets its own temporary output directory, so one converter can be
/// reused for any number of sequential conversions.
#[derive(Debug, Clone)]
pub struct DoclingCliConverter {
    config: ExtractionConfig,
}

impl DoclingCliConverter {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Arguments for one conversion, excluding the executable.
    ///
    /// The CLI always matches cells, so `cell_matching = false` cannot be honoured.
    pub fn args(&self, source: &Path, output_dir: &Path) -> Result<Vec<String>, ExtractionError> {
        if !self.config.cell_matching {
            return Err(ExtractionError::UnsupportedConfig(
                "cell_matching = false (docling CLI has no switch to disable it)",
            ));
        }

        let mut args = vec![
            "--to".to_string(),
            "json".to_string(),
            "--output".to_string(),
            output_dir.display().to_string(),
            "--table-mode".to_string(),
            self.config.table_mode.as_str().to_string(),
        ];
        args.push(if self.config.table_structure { "--tables" } else { "--no-tables" }.to_string());
        args.push("--image-export-mode".to_string());
        args.push(if self.config.page_images { "embedded" } else { "placeholder" }.to_string());
        args.push("--abort-on-error".to_string());
        args.extend(self.config.docling.extra_args.iter().cloned());
        args.push(source.display().to_string());
        Ok(args)
    }

    /// Docling names its output after the input file stem.
    fn output_path(source: &Path, output_dir: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        output_dir.join(format!("{stem}.json"))
    }
}

impl Default for DoclingCliConverter {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl DocumentConverter for DoclingCliConverter {
    fn convert(&self, source: &Path) -> Result<Document, ExtractionError> {
        if !source.is_file() {
            return Err(ExtractionError::SourceNotFound(source.to_path_buf()));
        }

        let out_dir = tempfile::tempdir()?;
        let command = &self.config.docling.command;
        let args = self.args(source, out_dir.path())?;
        debug!(%command, ?args, "running docling");

        let output = Command::new(command)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ExtractionError::Spawn {
                command: command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(%command, status = %output.status, "docling failed");
            return Err(ExtractionError::ConverterFailed {
                command: command.clone(),
                status: output.status,
                stderr,
            });
        }

        let json_path = Self::output_path(source, out_dir.path());
        if !json_path.is_file() {
            return Err(ExtractionError::MissingOutput(json_path));
        }
        let json = fs::read_to_string(&json_path)?;
        Document::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableMode;

    #[test]
    fn test_args_default_to_accurate_tables() {
        let conv = DoclingCliConverter::default();
        let args = conv.args(Path::new("/data/may.pdf"), Path::new("/tmp/out")).unwrap();
        assert_eq!(
            args,
            vec![
                "--to", "json", "--output", "/tmp/out", "--table-mode", "accurate", "--tables",
                "--image-export-mode", "embedded", "--abort-on-error", "/data/may.pdf",
            ]
        );
    }

    #[test]
    fn test_args_include_extra_args_before_source() {
        let mut cfg = ExtractionConfig::default();
        cfg.table_mode = TableMode::Fast;
        cfg.table_structure = false;
        cfg.docling.extra_args = vec!["--device".into(), "cpu".into()];
        let args = DoclingCliConverter::new(cfg).args(Path::new("a.pdf"), Path::new("o")).unwrap();

        assert!(args.contains(&"fast".to_string()));
        assert!(args.contains(&"--no-tables".to_string()));
        assert_eq!(&args[args.len() - 3..], ["--device", "cpu", "a.pdf"]);
    }

    #[test]
    fn test_page_images_off_uses_placeholder_export() {
        let on = DoclingCliConverter::default()
            .args(Path::new("a.pdf"), Path::new("o"))
            .unwrap();

        let mut cfg = ExtractionConfig::default();
        cfg.page_images = false;
        let off = DoclingCliConverter::new(cfg)
            .args(Path::new("a.pdf"), Path::new("o"))
            .unwrap();

        assert_ne!(off, on);
        let mode = off.iter().position(|a| a == "--image-export-mode").unwrap();
        assert_eq!(off[mode + 1], "placeholder");
    }

    #[test]
    fn test_cell_matching_off_is_rejected() {
        let mut cfg = ExtractionConfig::default();
        cfg.cell_matching = false;
        let conv = DoclingCliConverter::new(cfg);

        let err = conv.args(Path::new("a.pdf"), Path::new("o")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedConfig(_)));
    }

    #[test]
    fn test_cell_matching_off_fails_conversion_without_spawning() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("statement.pdf");
        fs::write(&pdf, b"%PDF-1.4\n").unwrap();

        let mut cfg = ExtractionConfig::default();
        cfg.cell_matching = false;
        cfg.docling.command = dir.path().join("no-docling-here").display().to_string();

        let err = DoclingCliConverter::new(cfg).convert(&pdf).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedConfig(_)), "got {err:?}");
    }

    #[test]
    fn test_output_path_uses_stem() {
        let p = DoclingCliConverter::output_path(Path::new("/x/Statement May.pdf"), Path::new("/o"));
        assert_eq!(p, PathBuf::from("/o/Statement May.json"));
    }

    #[test]
    fn test_missing_source_fails_before_spawning() {
        let mut cfg = ExtractionConfig::default();
        cfg.docling.command = "definitely-not-a-real-docling".to_string();
        let err = DoclingCliConverter::new(cfg)
            .convert(Path::new("/no/such/statement.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::SourceNotFound(_)));
    }
}
