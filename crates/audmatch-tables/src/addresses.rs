//! Address word tables keyed by country code.
//!
//! The `default` table is applied to every country after its own table,
//! so a country entry wins when both would match the same word.

use audmatch_model::{word_map, CountryTableMap, WordMap, DEFAULT_ADDRESS_KEY};

/// Address tables for every country that ships builtin data, plus the
/// default layer.
pub fn addresses() -> CountryTableMap {
    [
        (DEFAULT_ADDRESS_KEY, default_layer()),
        ("us", united_states()),
        ("gb", united_kingdom()),
        ("de", germany()),
        ("fr", france()),
        ("es", spain()),
    ]
    .into_iter()
    .map(|(code, table)| (code.to_string(), table))
    .collect()
}

fn default_layer() -> WordMap {
    word_map(&[
        ("street", "st"),
        ("avenue", "ave"),
        ("boulevard", "blvd"),
        ("road", "rd"),
        ("drive", "dr"),
        ("lane", "ln"),
        ("court", "ct"),
        ("place", "pl"),
        ("terrace", "ter"),
        ("circle", "cir"),
        ("square", "sq"),
        ("highway", "hwy"),
        ("parkway", "pkwy"),
        ("apartment", "apt"),
        ("suite", "ste"),
        ("building", "bldg"),
        ("floor", "fl"),
        ("room", "rm"),
        ("department", "dept"),
        ("fort", "ft"),
        ("mount", "mt"),
        ("saint", "st"),
    ])
}

fn united_states() -> WordMap {
    word_map(&[
        ("route", "rte"),
        ("expressway", "expy"),
        ("freeway", "fwy"),
        ("turnpike", "tpke"),
        ("crossing", "xing"),
        ("post office box", "po box"),
    ])
}

fn united_kingdom() -> WordMap {
    word_map(&[
        ("close", "cl"),
        ("crescent", "cres"),
        ("gardens", "gdns"),
        ("grove", "gr"),
    ])
}

// keys are the folded spellings since diacritics are rewritten before
// this table runs ("straße" arrives as "strasse")
fn germany() -> WordMap {
    word_map(&[("strasse", "str"), ("platz", "pl")])
}

fn france() -> WordMap {
    word_map(&[("avenue", "av"), ("boulevard", "bd"), ("faubourg", "fbg")])
}

fn spain() -> WordMap {
    word_map(&[
        ("avenida", "avda"),
        ("calle", "c"),
        ("carretera", "ctra"),
        ("plaza", "pza"),
    ])
}
