//! Invariant checks over arbitrary input.
//!
//! Canonical text must be safe to hash byte-for-byte on both sides of a
//! match, so these properties pin the output alphabet and the fixed-point
//! behavior of each field pipeline.

use std::sync::LazyLock;

use audmatch_format::{Formatter, RawRecord};
use proptest::prelude::*;

static FORMATTER: LazyLock<Formatter> = LazyLock::new(Formatter::new);

proptest! {
    #[test]
    fn postal_is_a_short_lowercase_prefix(input in ".*") {
        let postal = FORMATTER.format_postal(&input);
        prop_assert!(postal.chars().count() <= 5);
        prop_assert!(postal.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
    }

    #[test]
    fn phone_is_the_prefix_plus_input_digits(input in ".*") {
        let phone = FORMATTER.format_phone(&input, "us").unwrap();
        if input.is_empty() {
            prop_assert_eq!(phone, "");
        } else {
            let digits: String = input.chars().filter(char::is_ascii_digit).collect();
            prop_assert_eq!(phone, format!("1{digits}"));
        }
    }

    #[test]
    fn name_and_city_are_fixed_points(input in ".*") {
        let name = FORMATTER.format_name(&input);
        prop_assert_eq!(FORMATTER.format_name(&name), name);
        let city = FORMATTER.format_city(&input);
        prop_assert_eq!(FORMATTER.format_city(&city), city);
    }

    #[test]
    fn email_is_a_fixed_point(input in ".*") {
        let email = FORMATTER.format_email(&input);
        prop_assert_eq!(FORMATTER.format_email(&email), email);
    }

    #[test]
    fn postal_is_a_fixed_point(input in ".*") {
        let postal = FORMATTER.format_postal(&input);
        prop_assert_eq!(FORMATTER.format_postal(&postal), postal);
    }

    #[test]
    fn country_is_a_fixed_point(input in ".*") {
        let country = FORMATTER.format_country(&input);
        prop_assert_eq!(FORMATTER.format_country(&country), country);
    }

    #[test]
    fn canonical_output_is_always_ascii(input in ".*") {
        prop_assert!(FORMATTER.format_name(&input).is_ascii());
        prop_assert!(FORMATTER.format_email(&input).is_ascii());
        prop_assert!(FORMATTER.format_address(&input, "us").is_ascii());
        prop_assert!(FORMATTER.format_state(&input, "us").is_ascii());
        prop_assert!(FORMATTER.format_postal(&input).is_ascii());
        prop_assert!(FORMATTER.format_country(&input).is_ascii());
    }

    #[test]
    fn records_with_a_known_country_never_fail(
        phone in proptest::option::of(".*"),
        address in proptest::option::of(".*"),
        email in proptest::option::of(".*"),
        city in proptest::option::of(".*"),
    ) {
        let record = RawRecord {
            country: Some("us".to_string()),
            phone,
            address,
            email,
            city,
            ..RawRecord::default()
        };
        let canonical = FORMATTER.format_record(&record).unwrap();
        prop_assert_eq!(canonical.country, "us");
        prop_assert!(canonical.phone.chars().all(|ch| ch.is_ascii_digit()));
    }
}

// The address pipeline has no fixed-point property: the final character
// strip can fuse a word that the rewrite stages, which already ran, would
// have matched.
#[test]
fn address_is_not_a_fixed_point() {
    assert_eq!(FORMATTER.format_address("n'o", "us"), "no");
    assert_eq!(FORMATTER.format_address("no", "us"), "number");
    assert_eq!(FORMATTER.format_address("stre'et", "us"), "street");
    assert_eq!(FORMATTER.format_address("street", "us"), "st");
}

#[test]
fn supported_country_names_resolve_and_stay_fixed() {
    for (name, code) in &audmatch_tables::countries() {
        assert_eq!(&FORMATTER.format_country(name), code);
        // a resolved code resolves to itself
        assert_eq!(&FORMATTER.format_country(code), code);
    }
}
