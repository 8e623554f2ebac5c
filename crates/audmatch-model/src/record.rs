//! Audience record types at the three stages of the pipeline: raw input,
//! canonical text, and hashed output.

use serde::{Deserialize, Serialize};

/// A customer record as uploaded by a caller.
///
/// Every field is optional; absent, null, and empty-string fields all
/// canonicalize to the empty string. Only `country` is required by the
/// record-level operations, and that requirement is checked at call time
/// rather than encoded in the type so partial records can still be
/// represented and serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Phone number in any formatting, with or without country prefix.
    pub phone: Option<String>,
    /// Free-form street address line.
    pub address: Option<String>,
    /// Country name or code; drives phone-prefix selection.
    pub country: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    /// State or province, spelled out or abbreviated.
    pub state: Option<String>,
    /// Postal or ZIP code.
    pub postal: Option<String>,
}

/// A record after canonicalization: lowercase, delimiter-free text ready
/// to hash. Fields that were absent in the raw record are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub phone: String,
    pub address: String,
    pub country: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub postal: String,
}

/// A canonical record with every non-empty field replaced by the
/// lowercase-hex SHA-256 digest of its text. Empty fields stay empty so
/// absent data is never represented by the digest of the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashedRecord {
    pub phone: String,
    pub address: String,
    pub country: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub postal: String,
}
