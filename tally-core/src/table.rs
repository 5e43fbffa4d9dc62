//! Raw tables as they come out of the table extractor, before any bank rules apply.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One detected table region.
///
/// Headers are kept exactly as extracted: they can be empty, duplicated, or
/// numeric placeholders (`"0"`, `"1"`, ...) when the extractor found no header row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// 1-based page the table starts on, if known
    pub page: Option<u32>,
}

impl RawTable {
    /// Build a table without a header row; headers become column indices.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            headers: placeholder_headers(width),
            rows,
            page: None,
        }
    }

    pub fn with_headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn on_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Widest of the header row and every body row.
    pub fn num_columns(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text, or "" when the row is shorter than `col`.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All cells of one column, top to bottom. Missing cells read as "".
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.rows.len()).map(move |row| self.cell(row, col))
    }

    /// Stack tables vertically, matching columns by position.
    ///
    /// Rows are padded with empty cells up to the widest input. Headers and
    /// page come from the first table.
    pub fn concat(tables: &[RawTable]) -> RawTable {
        let width = tables.iter().map(RawTable::num_columns).max().unwrap_or(0);
        let mut headers = tables.first().map(|t| t.headers.clone()).unwrap_or_default();
        if headers.len() < width {
            headers.extend((headers.len()..width).map(|i| i.to_string()));
        }

        let rows = tables
            .iter()
            .flat_map(|t| t.rows.iter())
            .map(|r| {
                let mut row = r.clone();
                row.resize(width, String::new());
                row
            })
            .collect();

        RawTable {
            headers,
            rows,
            page: tables.first().and_then(|t| t.page),
        }
    }
}

fn placeholder_headers(width: usize) -> Vec<String> {
    (0..width).map(|i| i.to_string()).collect()
}

/// Where an extraction came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: PathBuf,
    /// Document name reported by the converter (usually the file stem)
    pub name: Option<String>,
    pub page_count: Option<u32>,
}

/// Tables of one document in page/position order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub metadata: DocumentMetadata,
    pub tables: Vec<RawTable>,
}

impl ExtractionResult {
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}
