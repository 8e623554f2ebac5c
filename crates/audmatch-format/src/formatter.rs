//! The audience canonicalization engine.
//!
//! A [`Formatter`] compiles a table set into matchers once, then exposes
//! pure per-field operations and the record-level orchestrator built on
//! them. Construction is the only expensive step; a formatter is
//! immutable afterwards and can be shared freely across threads.
//!
//! Tracing events emitted here carry counts and country codes only,
//! never field values, so logs stay free of customer data.

use std::collections::BTreeMap;

use audmatch_model::{
    CanonicalRecord, CountryTableMap, FormatError, RawRecord, Result, TableOverrides, TableSet,
    WordMap, DEFAULT_ADDRESS_KEY,
};
use serde::Deserialize;
use serde_json::Value;

use crate::pipeline::{
    collapse_whitespace, strip_to_alnum, strip_to_alnum_whitespace, strip_to_alpha,
    strip_to_email_chars, substitute, RewriteRules,
};

/// Country assumed when a record's own country resolves to nothing usable.
pub const DEFAULT_COUNTRY: &str = "us";

/// Longest canonical postal code.
const POSTAL_MAX_LEN: usize = 5;

/// Canonicalizes customer records for hashed audience matching.
#[derive(Debug, Clone)]
pub struct Formatter {
    phone_prefixes: WordMap,
    countries: WordMap,
    delimiters: WordMap,
    diacritics: WordMap,
    number_rules: RewriteRules,
    direction_rules: RewriteRules,
    state_rules: BTreeMap<String, RewriteRules>,
    address_rules: BTreeMap<String, RewriteRules>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Engine over the builtin tables.
    #[must_use]
    pub fn new() -> Self {
        Self::from_tables(audmatch_tables::builtin())
    }

    /// Engine over the builtin tables with caller overrides applied.
    #[must_use]
    pub fn with_overrides(overrides: TableOverrides) -> Self {
        Self::from_tables(audmatch_tables::builtin().merged(overrides))
    }

    /// Engine over a fully caller-supplied table set.
    #[must_use]
    pub fn from_tables(tables: TableSet) -> Self {
        let state_rules = compile_family(&tables.states);
        let address_rules = compile_family(&tables.addresses);
        tracing::debug!(
            countries = tables.countries.len(),
            state_tables = state_rules.len(),
            address_tables = address_rules.len(),
            "canonicalization tables compiled"
        );
        Self {
            phone_prefixes: tables.phone_prefixes,
            countries: tables.countries,
            delimiters: tables.delimiters,
            diacritics: tables.diacritics,
            number_rules: RewriteRules::compile(&tables.number_words),
            direction_rules: RewriteRules::compile(&tables.direction_words),
            state_rules,
            address_rules,
        }
    }

    /// Canonicalizes a phone number: the dialing prefix for `country`
    /// followed by the digits of `phone`, everything else dropped.
    ///
    /// The prefix is prepended without inspecting the digits, so a number
    /// that already carries one comes out doubled; callers are expected to
    /// submit national numbers.
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidCountryCode`] when `country` has no dialing
    /// prefix. An empty `phone` returns `Ok("")` before the country is
    /// consulted.
    pub fn format_phone(&self, phone: &str, country: &str) -> Result<String> {
        if phone.is_empty() {
            return Ok(String::new());
        }
        let key = country.to_lowercase();
        let Some(prefix) = self.phone_prefixes.get(&key) else {
            return Err(FormatError::InvalidCountryCode {
                country: country.to_string(),
            });
        };
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
        Ok(format!("{prefix}{digits}"))
    }

    /// Canonicalizes a street address for `country`.
    ///
    /// Stages, in order: lowercase, diacritic substitution, delimiter
    /// substitution, direction words, number words, the country's address
    /// table, the default address table, then a filter down to lowercase
    /// ASCII letters, digits, and single spaces.
    ///
    /// `country` may be a name or a code. Unknown countries skip the
    /// country-specific table but still get the default one.
    pub fn format_address(&self, address: &str, country: &str) -> String {
        if address.is_empty() {
            return String::new();
        }
        let code = self.resolve_country(country);
        let mut text = address.to_lowercase();
        text = substitute(&self.diacritics, &text);
        text = substitute(&self.delimiters, &text);
        text = self.direction_rules.apply(&text);
        text = self.number_rules.apply(&text);
        if let Some(rules) = self.address_rules.get(&code) {
            text = rules.apply(&text);
        } else {
            tracing::debug!(country = %code, "no address table for country");
        }
        if let Some(rules) = self.address_rules.get(DEFAULT_ADDRESS_KEY) {
            text = rules.apply(&text);
        }
        collapse_whitespace(&strip_to_alnum_whitespace(&text))
    }

    /// Resolves a country to its two-letter code.
    ///
    /// The lookup key is the input lowercased and stripped to ASCII
    /// letters, so "United States" and "UNITEDSTATES" probe the table
    /// identically. Unknown countries fall through as the stripped key.
    pub fn format_country(&self, country: &str) -> String {
        if country.is_empty() {
            return String::new();
        }
        let squashed = strip_to_alpha(&country.to_lowercase());
        match self.countries.get(&squashed) {
            Some(code) => code.clone(),
            None => squashed,
        }
    }

    /// Canonicalizes a person name: lowercase ASCII letters and digits
    /// only. Non-ASCII letters are dropped, not transliterated.
    pub fn format_name(&self, name: &str) -> String {
        strip_to_alnum(&name.to_lowercase())
    }

    /// Canonicalizes a city the same way as [`Self::format_name`]; spaces
    /// are dropped too, so "New York" becomes "newyork".
    pub fn format_city(&self, city: &str) -> String {
        strip_to_alnum(&city.to_lowercase())
    }

    /// Canonicalizes an email address: lowercase, keeping only ASCII
    /// letters, digits, `@`, `.`, and `-`. Accented characters and `+`
    /// are dropped like any other disallowed character.
    pub fn format_email(&self, email: &str) -> String {
        strip_to_email_chars(&email.to_lowercase())
    }

    /// Canonicalizes a state or province for `country`: the country's
    /// state table rewrites whole names to abbreviations, then diacritics
    /// are substituted and everything outside lowercase ASCII letters and
    /// digits is dropped.
    pub fn format_state(&self, state: &str, country: &str) -> String {
        if state.is_empty() {
            return String::new();
        }
        let code = self.resolve_country(country);
        let mut text = state.to_lowercase();
        if let Some(rules) = self.state_rules.get(&code) {
            text = rules.apply(&text);
        } else {
            tracing::debug!(country = %code, "no state table for country");
        }
        strip_to_alnum(&substitute(&self.diacritics, &text))
    }

    /// Canonicalizes a postal code: lowercase ASCII letters and digits,
    /// clipped to the first five. ZIP+4 extensions drop off; codes shorter
    /// than five characters pass through unpadded. No country-specific
    /// postal handling exists.
    pub fn format_postal(&self, postal: &str) -> String {
        let mut postal = strip_to_alnum(&postal.to_lowercase());
        // the stripped text is ASCII, so the byte clip is a character clip
        postal.truncate(POSTAL_MAX_LEN);
        postal
    }

    /// Canonicalizes a whole record.
    ///
    /// The record's country is resolved once and drives phone prefixing.
    /// Address and state are normalized for [`DEFAULT_COUNTRY`] regardless
    /// of the record's country; their country-specific tables only apply
    /// through the direct per-field calls.
    ///
    /// # Errors
    ///
    /// [`FormatError::MissingCountry`] when `country` is absent or empty,
    /// and [`FormatError::InvalidCountryCode`] when a phone is present but
    /// the resolved country has no dialing prefix.
    pub fn format_record(&self, record: &RawRecord) -> Result<CanonicalRecord> {
        let Some(raw_country) = non_empty(&record.country) else {
            return Err(FormatError::MissingCountry);
        };
        let country = self.format_country(raw_country);
        // a country that resolves to nothing still gets a dialing prefix
        let phone_country = if country.is_empty() {
            DEFAULT_COUNTRY
        } else {
            country.as_str()
        };
        let phone = match non_empty(&record.phone) {
            Some(phone) => self.format_phone(phone, phone_country)?,
            None => String::new(),
        };
        Ok(CanonicalRecord {
            phone,
            address: non_empty(&record.address)
                .map(|address| self.format_address(address, DEFAULT_COUNTRY))
                .unwrap_or_default(),
            country,
            first_name: non_empty(&record.first_name)
                .map(|name| self.format_name(name))
                .unwrap_or_default(),
            last_name: non_empty(&record.last_name)
                .map(|name| self.format_name(name))
                .unwrap_or_default(),
            email: non_empty(&record.email)
                .map(|email| self.format_email(email))
                .unwrap_or_default(),
            city: non_empty(&record.city)
                .map(|city| self.format_city(city))
                .unwrap_or_default(),
            state: non_empty(&record.state)
                .map(|state| self.format_state(state, DEFAULT_COUNTRY))
                .unwrap_or_default(),
            postal: non_empty(&record.postal)
                .map(|postal| self.format_postal(postal))
                .unwrap_or_default(),
        })
    }

    /// Canonicalizes a batch of records, preserving order.
    ///
    /// # Errors
    ///
    /// Fails fast on the first record that fails; earlier results are
    /// discarded.
    pub fn format_records(&self, records: &[RawRecord]) -> Result<Vec<CanonicalRecord>> {
        let canonical = records
            .iter()
            .map(|record| self.format_record(record))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(records = canonical.len(), "records canonicalized");
        Ok(canonical)
    }

    /// Canonicalizes a loosely typed record as it arrives in uploaded
    /// JSON.
    ///
    /// `null` short-circuits to a record of empty fields without the
    /// country check. Objects must carry string (or null) fields only.
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidRecordType`] when the value is not an object
    /// or has non-string fields, plus everything [`Self::format_record`]
    /// returns.
    pub fn format_value(&self, value: &Value) -> Result<CanonicalRecord> {
        match value {
            Value::Null => Ok(CanonicalRecord::default()),
            Value::Object(_) => match RawRecord::deserialize(value) {
                Ok(record) => self.format_record(&record),
                Err(_) => Err(FormatError::InvalidRecordType {
                    kind: "object with non-string fields".to_string(),
                }),
            },
            other => Err(FormatError::InvalidRecordType {
                kind: json_kind(other).to_string(),
            }),
        }
    }

    /// Canonicalizes a batch of loosely typed records, preserving order
    /// and failing fast like [`Self::format_records`].
    ///
    /// # Errors
    ///
    /// See [`Self::format_value`].
    pub fn format_values(&self, values: &[Value]) -> Result<Vec<CanonicalRecord>> {
        let canonical = values
            .iter()
            .map(|value| self.format_value(value))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(records = canonical.len(), "records canonicalized");
        Ok(canonical)
    }

    // Address and state lookups resolve the country with the raw
    // lowercased input, so "UnitedStates" hits while "United States"
    // misses on its space and falls through. Phone prefixing goes through
    // format_country, which strips before probing.
    fn resolve_country(&self, country: &str) -> String {
        let key = country.to_lowercase();
        match self.countries.get(&key) {
            Some(code) => code.clone(),
            None => key,
        }
    }
}

fn compile_family(family: &CountryTableMap) -> BTreeMap<String, RewriteRules> {
    family
        .iter()
        .map(|(code, table)| (code.clone(), RewriteRules::compile(table)))
        .collect()
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
