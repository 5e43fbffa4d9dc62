//! Supported banks and name → normalizer lookup.

pub mod sainsburys;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tally_core::NormalizeError;

use crate::normalizer::{BankNormalizer, LedgerRules, RuleBasedNormalizer};

/// Banks with built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bank {
    Sainsburys,
}

impl Bank {
    pub const ALL: [Bank; 1] = [Bank::Sainsburys];

    pub fn name(&self) -> &'static str {
        match self {
            Bank::Sainsburys => sainsburys::NAME,
        }
    }

    pub fn normalizer(&self) -> Box<dyn BankNormalizer> {
        match self {
            Bank::Sainsburys => Box::new(sainsburys::normalizer()),
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Bank {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match registry_key(s).as_str() {
            "sainsburys" | "sainsburys-bank" | "sainsbury's" => Ok(Bank::Sainsburys),
            _ => Err(NormalizeError::UnknownBank(s.to_string())),
        }
    }
}

/// Lookup form of a bank name: trimmed and lowercased.
fn registry_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalizers by name. Starts with the built-in banks; callers can add
/// their own, either bespoke `BankNormalizer`s or plain `LedgerRules`.
pub struct NormalizerRegistry {
    normalizers: BTreeMap<String, Box<dyn BankNormalizer>>,
}

impl NormalizerRegistry {
    pub fn empty() -> Self {
        Self {
            normalizers: BTreeMap::new(),
        }
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        for bank in Bank::ALL {
            registry.register(bank.normalizer());
        }
        registry
    }

    /// Add or replace a normalizer under its own name (trimmed, lowercased).
    pub fn register(&mut self, normalizer: Box<dyn BankNormalizer>) {
        self.normalizers.insert(registry_key(normalizer.name()), normalizer);
    }

    pub fn register_rules(&mut self, rules: LedgerRules) {
        self.register(Box::new(RuleBasedNormalizer::new(rules)));
    }

    /// Look up by name, matched the same way as `Bank::from_str`: case and
    /// surrounding whitespace are ignored, and built-in bank aliases resolve.
    pub fn get(&self, name: &str) -> Result<&dyn BankNormalizer, NormalizeError> {
        let mut key = registry_key(name);
        if !self.normalizers.contains_key(&key) {
            if let Ok(bank) = key.parse::<Bank>() {
                key = bank.name().to_string();
            }
        }
        self.normalizers
            .get(&key)
            .map(|n| &**n)
            .ok_or_else(|| NormalizeError::UnknownBank(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.normalizers.keys().map(String::as_str)
    }
}

impl Default for NormalizerRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
