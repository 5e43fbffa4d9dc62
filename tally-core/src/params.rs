//! Caller-supplied inputs that cannot be recovered from the PDF itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// What to do when no amount candidate column parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Return `None` instead of a statement
    #[default]
    Lenient,
    /// Return `NormalizeError::UnparseableAmount`
    Strict,
}

/// Named parameters for one normalization call, e.g. `year = "2024"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationParameters {
    #[serde(default)]
    values: BTreeMap<String, String>,
    #[serde(default)]
    pub mode: ParseMode,
}

impl NormalizationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with_year(self, year: impl ToString) -> Self {
        self.with("year", year.to_string())
    }

    pub fn strict(mut self) -> Self {
        self.mode = ParseMode::Strict;
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value of a required parameter; blank values count as missing.
    pub fn require(&self, name: &'static str) -> Result<&str, NormalizeError> {
        match self.get(name).map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(NormalizeError::MissingParameter(name)),
        }
    }

    /// Required statement year as an integer.
    pub fn year(&self) -> Result<i32, NormalizeError> {
        let raw = self.require("year")?;
        raw.parse().map_err(|_| NormalizeError::InvalidParameter {
            name: "year",
            value: raw.to_string(),
        })
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ParseMode::Strict
    }
}
