use thiserror::Error;

/// Errors surfaced while canonicalizing audience records.
///
/// Table lookup misses are not errors: an unmatched word or an unknown
/// country name falls through unchanged. Only the conditions below abort
/// a call, and none of them can be fixed by retrying the same input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The country has no dialing prefix, so a phone number cannot be
    /// canonicalized for it.
    #[error("invalid country code: {country}")]
    InvalidCountryCode { country: String },

    /// A record arrived without a country. Every record-level operation
    /// requires one to pick the right phone prefix.
    #[error("country is required")]
    MissingCountry,

    /// Loose input was not a usable audience record. `kind` names what was
    /// found instead (for example "array", or "object with non-string
    /// fields"); it never contains field values.
    #[error("record must be a JSON object, got {kind}")]
    InvalidRecordType { kind: String },
}

pub type Result<T> = std::result::Result<T, FormatError>;
