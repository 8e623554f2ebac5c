//! Builtin lookup tables for audience canonicalization.
//!
//! This crate is data only. The engine compiles these maps into matchers
//! at construction time, and callers can replace any table wholesale
//! through `TableOverrides`, so nothing here is load-bearing beyond the
//! entries themselves.

mod addresses;
mod states;

use audmatch_model::{word_map, TableSet, WordMap};

pub use addresses::addresses;
pub use states::states;

/// The complete builtin table set.
pub fn builtin() -> TableSet {
    TableSet {
        phone_prefixes: phone_prefixes(),
        countries: countries(),
        number_words: number_words(),
        direction_words: direction_words(),
        delimiters: delimiters(),
        diacritics: diacritics(),
        states: states(),
        addresses: addresses(),
    }
}

/// Dialing prefix per supported country code.
pub fn phone_prefixes() -> WordMap {
    word_map(&[
        ("us", "1"),
        ("ca", "1"),
        ("mx", "52"),
        ("gb", "44"),
        ("fr", "33"),
        ("de", "49"),
        ("it", "39"),
        ("es", "34"),
        ("nl", "31"),
        ("in", "91"),
        ("jp", "81"),
        ("au", "61"),
        ("sa", "966"),
        ("ae", "971"),
        ("tr", "90"),
        ("se", "46"),
        ("be", "32"),
        ("pl", "48"),
        ("sg", "65"),
    ])
}

/// Squashed country name to country code. Keys carry no spaces or
/// punctuation; lookups squash their input the same way.
pub fn countries() -> WordMap {
    word_map(&[
        ("canada", "ca"),
        ("france", "fr"),
        ("germany", "de"),
        ("greatbritain", "gb"),
        ("unitedkingdom", "gb"),
        ("italy", "it"),
        ("spain", "es"),
        ("unitedstates", "us"),
        ("unitedstatesofamerica", "us"),
        ("mexico", "mx"),
        ("netherlands", "nl"),
        ("india", "in"),
        ("japan", "jp"),
        ("australia", "au"),
        ("saudiarabia", "sa"),
        ("unitedarabemirates", "ae"),
        ("turkey", "tr"),
        ("sweden", "se"),
        ("belgium", "be"),
        ("poland", "pl"),
        ("singapore", "sg"),
    ])
}

/// Spelled-out number markers rewritten to the word "number".
pub fn number_words() -> WordMap {
    word_map(&[
        ("número", "number"),
        ("numero", "number"),
        ("núm", "number"),
        ("num", "number"),
        ("no", "number"),
    ])
}

/// Compass words rewritten to their postal abbreviation.
pub fn direction_words() -> WordMap {
    word_map(&[
        ("north", "n"),
        ("south", "s"),
        ("east", "e"),
        ("west", "w"),
        ("northeast", "ne"),
        ("northwest", "nw"),
        ("southeast", "se"),
        ("southwest", "sw"),
    ])
}

/// Punctuation rewritten before any word matching runs. `#` expands to a
/// spelled-out marker so "Apt #5" and "Apt No 5" canonicalize alike.
pub fn delimiters() -> WordMap {
    word_map(&[
        (",", " "),
        (".", " "),
        ("[", " "),
        ("]", " "),
        ("/", " "),
        ("-", " "),
        ("#", " number "),
    ])
}

/// Single-character transliterations applied before ASCII filtering.
pub fn diacritics() -> WordMap {
    word_map(&[
        ("ß", "ss"),
        ("ä", "ae"),
        ("ö", "oe"),
        ("ü", "ue"),
        ("ø", "o"),
        ("æ", "ae"),
    ])
}
