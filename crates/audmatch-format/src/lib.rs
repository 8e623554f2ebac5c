//! Canonicalization engine for hashed audience matching.
//!
//! Ad platforms match uploaded customer lists by comparing SHA-256
//! digests of normalized PII, so both sides must canonicalize text
//! identically before hashing. This crate rewrites each record field
//! into that canonical form (lookup-table driven, lowercase ASCII, no
//! delimiters) and hashes the result.
//!
//! ```
//! use audmatch_format::{Formatter, RawRecord};
//!
//! let formatter = Formatter::new();
//! let record = RawRecord {
//!     country: Some("United States".to_string()),
//!     email: Some("John.Doe@Example.com".to_string()),
//!     ..RawRecord::default()
//! };
//! let canonical = formatter.format_record(&record)?;
//! assert_eq!(canonical.country, "us");
//! assert_eq!(canonical.email, "john.doe@example.com");
//! # Ok::<(), audmatch_format::FormatError>(())
//! ```

pub mod formatter;
pub mod hash;
mod pipeline;

pub use audmatch_model::{
    word_map, CanonicalRecord, CountryTableMap, FormatError, HashedRecord, RawRecord, Result,
    TableOverrides, TableSet, WordMap, DEFAULT_ADDRESS_KEY,
};
pub use formatter::{Formatter, DEFAULT_COUNTRY};
pub use hash::{hash_record, sha256_hex};
