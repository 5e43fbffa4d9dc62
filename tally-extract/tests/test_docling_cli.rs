//! Drives `DoclingCliConverter` against stand-in executables.

use std::fs;
use std::path::{Path, PathBuf};

use tally_extract::{ExtractionAdapter, ExtractionConfig, ExtractionError};

const DOCUMENT_JSON: &str = r#"{
  "name": "statement",
  "pages": { "1": {}, "2": {} },
  "tables": [
    { "prov": [{"page_no": 1}],
      "data": { "num_rows": 1, "num_cols": 3, "table_cells": [
        {"text": "1 Jan", "start_row_offset_idx": 0, "end_row_offset_idx": 1, "start_col_offset_idx": 0, "end_col_offset_idx": 1},
        {"text": "Coffee Shop", "start_row_offset_idx": 0, "end_row_offset_idx": 1, "start_col_offset_idx": 1, "end_col_offset_idx": 2},
        {"text": "12.50", "start_row_offset_idx": 0, "end_row_offset_idx": 1, "start_col_offset_idx": 2, "end_col_offset_idx": 3}
      ] } }
  ]
}"#;

fn write_pdf(dir: &Path) -> PathBuf {
    let pdf = dir.join("statement.pdf");
    fs::write(&pdf, b"%PDF-1.4\n").unwrap();
    pdf
}

fn config_with_command(command: impl Into<String>) -> ExtractionConfig {
    let mut cfg = ExtractionConfig::default();
    cfg.docling.command = command.into();
    cfg
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn test_fake_docling_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = dir.path().join("fixture.json");
    fs::write(&fixture, DOCUMENT_JSON).unwrap();

    // Copies the fixture to <--output>/<stem of last arg>.json, like docling does.
    let script = write_script(
        dir.path(),
        "docling",
        &format!(
            r#"out=""
prev=""
for a in "$@"; do
  if [ "$prev" = "--output" ]; then out="$a"; fi
  prev="$a"
  src="$a"
done
stem=$(basename "$src" .pdf)
cp "{}" "$out/$stem.json"
"#,
            fixture.display()
        ),
    );

    let pdf = write_pdf(dir.path());
    let adapter = ExtractionAdapter::docling(config_with_command(script.display().to_string()));
    let result = adapter.extract(&pdf).unwrap();

    assert_eq!(result.metadata.source, pdf);
    assert_eq!(result.metadata.page_count, Some(2));
    assert_eq!(result.table_count(), 1);
    assert_eq!(result.tables[0].rows[0], vec!["1 Jan", "Coffee Shop", "12.50"]);
    assert_eq!(result.tables[0].page, Some(1));

    // Reuse the same adapter for a second document.
    let again = adapter.extract(&pdf).unwrap();
    assert_eq!(again, result);
}

#[cfg(unix)]
#[test]
fn test_nonzero_exit_is_converter_failure() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "docling", "echo 'corrupt PDF' >&2\nexit 3\n");
    let pdf = write_pdf(dir.path());

    let adapter = ExtractionAdapter::docling(config_with_command(script.display().to_string()));
    match adapter.extract(&pdf) {
        Err(ExtractionError::ConverterFailed { stderr, status, .. }) => {
            assert_eq!(stderr, "corrupt PDF");
            assert_eq!(status.code(), Some(3));
        }
        other => panic!("expected ConverterFailed, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_silent_converter_is_missing_output() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(dir.path(), "docling", "exit 0\n");
    let pdf = write_pdf(dir.path());

    let adapter = ExtractionAdapter::docling(config_with_command(script.display().to_string()));
    let err = adapter.extract(&pdf).unwrap_err();
    assert!(matches!(err, ExtractionError::MissingOutput(_)));
}

#[test]
fn test_missing_executable_is_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_pdf(dir.path());

    let adapter = ExtractionAdapter::docling(config_with_command(
        dir.path().join("no-docling-here").display().to_string(),
    ));
    let err = adapter.extract(&pdf).unwrap_err();
    assert!(matches!(err, ExtractionError::Spawn { .. }), "got {err:?}");
}
