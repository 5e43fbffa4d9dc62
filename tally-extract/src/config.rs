//! Extraction settings, optionally read from a TOML file.
//!
//! ```toml
//! table_structure = true
//! table_mode = "accurate"
//! cell_matching = true
//! page_images = true
//!
//! [docling]
//! command = "docling"
//! extra_args = ["--device", "cpu"]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Table-structure model quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableMode {
    Fast,
    #[default]
    Accurate,
}

impl TableMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableMode::Fast => "fast",
            TableMode::Accurate => "accurate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Run table-structure detection at all
    pub table_structure: bool,
    pub table_mode: TableMode,
    /// Match predicted cells back to PDF text cells
    pub cell_matching: bool,
    /// Render page images; the table detector infers boundaries from them
    pub page_images: bool,
    pub docling: DoclingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoclingSection {
    /// Executable to run (default: "docling")
    pub command: String,
    /// Extra args passed before the source path
    pub extra_args: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            table_structure: true,
            table_mode: TableMode::Accurate,
            cell_matching: true,
            page_images: true,
            docling: DoclingSection::default(),
        }
    }
}

impl Default for DoclingSection {
    fn default() -> Self {
        Self {
            command: "docling".to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Load config from `path`, or defaults if the file does not exist.
pub fn load_config(path: &Path) -> Result<ExtractionConfig> {
    if !path.exists() {
        return Ok(ExtractionConfig::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(path: &Path, cfg: &ExtractionConfig) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize extraction config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
