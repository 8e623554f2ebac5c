pub mod error;
pub mod record;
pub mod tables;

pub use error::{FormatError, Result};
pub use record::{CanonicalRecord, HashedRecord, RawRecord};
pub use tables::{
    word_map, CountryTableMap, TableOverrides, TableSet, WordMap, DEFAULT_ADDRESS_KEY,
};
