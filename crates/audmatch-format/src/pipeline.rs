//! Text rewriting primitives the field pipelines are built from.
//!
//! Word tables are compiled once into whole-word regex rules; the
//! per-field pipelines then chain rule applications with character
//! substitution and ASCII filtering.

use std::borrow::Cow;

use audmatch_model::WordMap;
use regex::{NoExpand, Regex};

/// A word table compiled into ordered whole-word replacement rules.
///
/// Keys match at Unicode word boundaries only, so "no" never rewrites the
/// inside of "noël". Longer keys are applied before shorter ones; without
/// that, a table holding both "virginia" and "west virginia" would rewrite
/// the wrong half of "west virginia" first.
#[derive(Debug, Clone)]
pub(crate) struct RewriteRules {
    rules: Vec<(Regex, String)>,
}

impl RewriteRules {
    pub(crate) fn compile(table: &WordMap) -> Self {
        let mut entries: Vec<_> = table.iter().collect();
        entries.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        let rules = entries
            .into_iter()
            .filter_map(|(word, replacement)| {
                let pattern = format!(r"\b{}\b", regex::escape(word));
                match Regex::new(&pattern) {
                    Ok(matcher) => Some((matcher, replacement.clone())),
                    Err(error) => {
                        tracing::warn!(key = %word, %error, "table entry failed to compile; entry skipped");
                        None
                    }
                }
            })
            .collect();
        Self { rules }
    }

    /// Applies every rule in order. Replacement text is inserted literally.
    pub(crate) fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for (matcher, replacement) in &self.rules {
            if let Cow::Owned(rewritten) = matcher.replace_all(&current, NoExpand(replacement)) {
                current = rewritten;
            }
        }
        current
    }
}

/// Replaces every occurrence of each table key as a literal substring.
///
/// Used for the delimiter and diacritic tables, whose keys are punctuation
/// or single characters that word boundaries would not surround.
pub(crate) fn substitute(table: &WordMap, text: &str) -> String {
    let mut current = text.to_string();
    for (needle, replacement) in table {
        if current.contains(needle.as_str()) {
            current = current.replace(needle.as_str(), replacement);
        }
    }
    current
}

/// Keeps lowercase ASCII letters and digits.
pub(crate) fn strip_to_alnum(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

/// Keeps lowercase ASCII letters, digits, and whitespace.
pub(crate) fn strip_to_alnum_whitespace(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace())
        .collect()
}

/// Keeps lowercase ASCII letters only.
pub(crate) fn strip_to_alpha(text: &str) -> String {
    text.chars().filter(char::is_ascii_lowercase).collect()
}

/// Keeps the characters permitted in a canonical email address.
pub(crate) fn strip_to_email_chars(text: &str) -> String {
    text.chars()
        .filter(|ch| {
            ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '@' | '.' | '-')
        })
        .collect()
}

/// Collapses every whitespace run to a single space and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use audmatch_model::word_map;

    #[test]
    fn rules_match_whole_words_only() {
        let rules = RewriteRules::compile(&word_map(&[("no", "number")]));
        assert_eq!(rules.apply("no 5"), "number 5");
        assert_eq!(rules.apply("north"), "north");
        // word boundaries are unicode-aware: "no" is not a whole word here
        assert_eq!(rules.apply("noël"), "noël");
    }

    #[test]
    fn longer_keys_win_over_their_substrings() {
        let rules = RewriteRules::compile(&word_map(&[
            ("virginia", "va"),
            ("west virginia", "wv"),
        ]));
        assert_eq!(rules.apply("west virginia"), "wv");
        assert_eq!(rules.apply("virginia"), "va");
    }

    #[test]
    fn keys_are_matched_literally() {
        let rules = RewriteRules::compile(&word_map(&[("a.c", "x")]));
        assert_eq!(rules.apply("a.c"), "x");
        // the dot is escaped, not a wildcard
        assert_eq!(rules.apply("abc"), "abc");
    }

    #[test]
    fn replacements_are_inserted_literally() {
        let rules = RewriteRules::compile(&word_map(&[("apt", "$0 unit")]));
        assert_eq!(rules.apply("apt 5"), "$0 unit 5");
    }

    #[test]
    fn substitute_replaces_every_occurrence() {
        let table = word_map(&[("ß", "ss"), ("-", " ")]);
        assert_eq!(substitute(&table, "weiß-straße"), "weiss strasse");
    }

    #[test]
    fn collapse_whitespace_handles_tabs_and_ends() {
        assert_eq!(collapse_whitespace("  123 \t main\n st  "), "123 main st");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
