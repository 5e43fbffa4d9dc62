//! The subset of the Docling JSON document this crate reads.
//!
//! A converted document looks roughly like:
//!   { "name": "statement", "pages": { "1": {...}, "2": {...} },
//!     "tables": [ { "prov": [{"page_no": 1}],
//!                   "data": { "num_rows": 3, "num_cols": 3,
//!                             "table_cells": [ { "text": "Date", "column_header": true,
//!                                                "start_row_offset_idx": 0, "end_row_offset_idx": 1,
//!                                                "start_col_offset_idx": 0, "end_col_offset_idx": 1 }, ... ] } } ] }

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use tally_core::{DocumentMetadata, ExtractionResult, RawTable};

use crate::error::ExtractionError;

/// A converted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: Option<String>,
    /// Keyed by page number as a string
    #[serde(default)]
    pub pages: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub tables: Vec<TableItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableItem {
    #[serde(default)]
    pub prov: Vec<Provenance>,
    #[serde(default)]
    pub data: TableData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub page_no: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub num_rows: usize,
    #[serde(default)]
    pub num_cols: usize,
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub column_header: bool,
    pub start_row_offset_idx: usize,
    pub end_row_offset_idx: usize,
    pub start_col_offset_idx: usize,
    pub end_col_offset_idx: usize,
}

impl Document {
    pub fn from_json(s: &str) -> Result<Self, ExtractionError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn page_count(&self) -> Option<u32> {
        if self.pages.is_empty() {
            return None;
        }
        u32::try_from(self.pages.len()).ok()
    }

    /// Raw tables in document order plus metadata.
    pub fn into_extraction(self, source: &Path) -> ExtractionResult {
        ExtractionResult {
            metadata: DocumentMetadata {
                source: source.to_path_buf(),
                name: self.name.clone(),
                page_count: self.page_count(),
            },
            tables: self.tables.iter().map(TableItem::to_raw_table).collect(),
        }
    }
}

impl TableItem {
    /// Convert to a row/column table.
    ///
    /// Cells are laid out on a grid by their offsets; a spanning cell repeats its
    /// text in every slot it covers. Leading rows that contain a column-header
    /// cell become the header; distinct header texts of a column are joined with ".".
    pub fn to_raw_table(&self) -> RawTable {
        let grid = self.grid();

        let header_rows = grid
            .iter()
            .take_while(|row| row.iter().any(|(_, is_header)| *is_header))
            .count();

        let width = grid.first().map(Vec::len).unwrap_or(0);
        let headers = if header_rows == 0 {
            (0..width).map(|i| i.to_string()).collect()
        } else {
            (0..width)
                .map(|col| {
                    let mut parts: Vec<&str> = Vec::new();
                    for row in &grid[..header_rows] {
                        let text = row[col].0.trim();
                        if !text.is_empty() && !parts.contains(&text) {
                            parts.push(text);
                        }
                    }
                    parts.join(".")
                })
                .collect()
        };

        let rows = grid[header_rows..]
            .iter()
            .map(|row| row.iter().map(|(text, _)| text.clone()).collect())
            .collect();

        RawTable {
            headers,
            rows,
            page: self.prov.first().map(|p| p.page_no),
        }
    }

    /// Grid sized by the declared `num_rows` x `num_cols`; cell spans past
    /// those bounds are clipped.
    fn grid(&self) -> Vec<Vec<(String, bool)>> {
        let data = &self.data;
        let (rows, cols) = (data.num_rows, data.num_cols);

        let mut grid = vec![vec![(String::new(), false); cols]; rows];
        for cell in &data.table_cells {
            for r in cell.start_row_offset_idx..cell.end_row_offset_idx.min(rows) {
                for c in cell.start_col_offset_idx..cell.end_col_offset_idx.min(cols) {
                    grid[r][c] = (cell.text.clone(), cell.column_header);
                }
            }
        }
        grid
    }
}
