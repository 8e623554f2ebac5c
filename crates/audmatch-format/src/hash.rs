#![deny(unsafe_code)]

//! SHA-256 hashing of canonical records.
//!
//! Matching platforms ingest digests, not text; hashing is the last step
//! after canonicalization and must see exactly the canonical bytes.

use audmatch_model::{CanonicalRecord, HashedRecord};
use sha2::Digest;

/// Lowercase-hex SHA-256 digest of the input's UTF-8 bytes.
pub fn sha256_hex(value: &str) -> String {
    let digest = sha2::Sha256::digest(value.as_bytes());
    hex::encode(digest)
}

/// Hashes every non-empty field of a canonical record.
///
/// Empty fields stay empty rather than becoming the digest of the empty
/// string, so absent data remains recognizably absent downstream.
pub fn hash_record(record: &CanonicalRecord) -> HashedRecord {
    HashedRecord {
        phone: hash_field(&record.phone),
        address: hash_field(&record.address),
        country: hash_field(&record.country),
        first_name: hash_field(&record.first_name),
        last_name: hash_field(&record.last_name),
        email: hash_field(&record.email),
        city: hash_field(&record.city),
        state: hash_field(&record.state),
        postal: hash_field(&record.postal),
    }
}

fn hash_field(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        sha256_hex(value)
    }
}
