//! Lookup-table model for audience canonicalization.
//!
//! Tables are plain ordered maps so they can be serialized, diffed, and
//! replaced wholesale by callers. The engine compiles them into matchers
//! at construction time; nothing here knows how matching works.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A flat replacement table mapping a lookup key to its replacement text.
pub type WordMap = BTreeMap<String, String>;

/// Replacement tables grouped by two-letter country code.
pub type CountryTableMap = BTreeMap<String, WordMap>;

/// Key of the address table layered onto every country after the
/// country-specific one.
pub const DEFAULT_ADDRESS_KEY: &str = "default";

/// The full set of lookup tables the canonicalization engine runs on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSet {
    /// Dialing prefix per country code (e.g. "us" -> "1").
    pub phone_prefixes: WordMap,
    /// Squashed country name to country code (e.g. "unitedstates" -> "us").
    pub countries: WordMap,
    /// Spelled-out number markers rewritten to "number".
    pub number_words: WordMap,
    /// Compass words rewritten to their single- or two-letter form.
    pub direction_words: WordMap,
    /// Punctuation replaced before word rewriting (e.g. "#" -> " number ").
    pub delimiters: WordMap,
    /// Single-character transliterations (e.g. "ß" -> "ss").
    pub diacritics: WordMap,
    /// State and province names per country code.
    pub states: CountryTableMap,
    /// Address words per country code, plus a `default` entry applied to
    /// every country.
    pub addresses: CountryTableMap,
}

impl TableSet {
    /// Applies caller overrides on top of this set.
    ///
    /// Merging is shallow: a `Some` table replaces the builtin table for
    /// that key entirely, entries are never merged. `states` and
    /// `addresses` replace the whole per-country family.
    #[must_use]
    pub fn merged(mut self, overrides: TableOverrides) -> Self {
        if let Some(table) = overrides.phone_prefixes {
            self.phone_prefixes = table;
        }
        if let Some(table) = overrides.countries {
            self.countries = table;
        }
        if let Some(table) = overrides.number_words {
            self.number_words = table;
        }
        if let Some(table) = overrides.direction_words {
            self.direction_words = table;
        }
        if let Some(table) = overrides.delimiters {
            self.delimiters = table;
        }
        if let Some(table) = overrides.diacritics {
            self.diacritics = table;
        }
        if let Some(table) = overrides.states {
            self.states = table;
        }
        if let Some(table) = overrides.addresses {
            self.addresses = table;
        }
        self
    }
}

/// Caller-supplied table replacements.
///
/// Deserializes from the same JSON shape as [`TableSet`] with every key
/// optional, so a caller can override one table and keep the rest of the
/// builtin data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOverrides {
    pub phone_prefixes: Option<WordMap>,
    pub countries: Option<WordMap>,
    pub number_words: Option<WordMap>,
    pub direction_words: Option<WordMap>,
    pub delimiters: Option<WordMap>,
    pub diacritics: Option<WordMap>,
    pub states: Option<CountryTableMap>,
    pub addresses: Option<CountryTableMap>,
}

/// Builds a [`WordMap`] from literal pairs.
pub fn word_map(entries: &[(&str, &str)]) -> WordMap {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}
