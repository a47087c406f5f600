//! Predicate evaluation of a [`FilterSpec`] against an [`AnalyzedString`].
//!
//! This is the single matching contract shared by the structured-query and
//! natural-language paths: a record matches iff every present criterion is
//! satisfied. Absent criteria impose no constraint, so the all-absent spec
//! matches every record.

use crate::filter::FilterSpec;
use crate::record::AnalyzedString;

/// Check whether a record satisfies every present criterion of the spec.
///
/// Semantics per criterion: boolean equality for the palindrome flag,
/// inclusive bounds for lengths, exact equality for word count, and
/// case-insensitive containment for the character criterion.
pub fn matches_filter(record: &AnalyzedString, spec: &FilterSpec) -> bool {
    if let Some(p) = spec.is_palindrome {
        if record.is_palindrome != p {
            return false;
        }
    }
    if let Some(min) = spec.min_length {
        if record.length < min {
            return false;
        }
    }
    if let Some(max) = spec.max_length {
        if record.length > max {
            return false;
        }
    }
    if let Some(n) = spec.word_count {
        if record.word_count != n {
            return false;
        }
    }
    if let Some(c) = spec.contains_character {
        let needle: String = c.to_lowercase().collect();
        if !record.value.to_lowercase().contains(&needle) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: &str) -> AnalyzedString {
        AnalyzedString::analyze(value)
    }

    fn spec() -> FilterSpec {
        FilterSpec::default()
    }

    #[test]
    fn empty_spec_matches_everything() {
        assert!(matches_filter(&record("anything at all"), &spec()));
        assert!(matches_filter(&record(""), &spec()));
    }

    #[test]
    fn palindrome_requires_equality_both_ways() {
        let yes = FilterSpec {
            is_palindrome: Some(true),
            ..spec()
        };
        let no = FilterSpec {
            is_palindrome: Some(false),
            ..spec()
        };
        assert!(matches_filter(&record("racecar"), &yes));
        assert!(!matches_filter(&record("racecar"), &no));
        assert!(matches_filter(&record("hello"), &no));
        assert!(!matches_filter(&record("hello"), &yes));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let bounded = FilterSpec {
            min_length: Some(5),
            max_length: Some(5),
            ..spec()
        };
        assert!(matches_filter(&record("hello"), &bounded));
        assert!(!matches_filter(&record("hell"), &bounded));
        assert!(!matches_filter(&record("hellos"), &bounded));
    }

    #[test]
    fn word_count_is_exact() {
        let two = FilterSpec {
            word_count: Some(2),
            ..spec()
        };
        assert!(matches_filter(&record("hello world"), &two));
        assert!(!matches_filter(&record("hello"), &two));
        assert!(!matches_filter(&record("one two three"), &two));
    }

    #[test]
    fn containment_is_case_insensitive() {
        let has_z = FilterSpec {
            contains_character: Some('z'),
            ..spec()
        };
        assert!(matches_filter(&record("Zebra"), &has_z));
        assert!(matches_filter(&record("fuzz"), &has_z));
        assert!(!matches_filter(&record("hello"), &has_z));
    }

    #[test]
    fn criteria_combine_with_and() {
        let combined = FilterSpec {
            is_palindrome: Some(true),
            word_count: Some(1),
            ..spec()
        };
        assert!(matches_filter(&record("racecar"), &combined));
        // Palindrome but two words
        assert!(!matches_filter(&record("no on"), &combined));
        // One word but not a palindrome
        assert!(!matches_filter(&record("hello"), &combined));
    }

    #[test]
    fn zero_bounds_are_honored_not_ignored() {
        let max_zero = FilterSpec {
            max_length: Some(0),
            ..spec()
        };
        assert!(matches_filter(&record(""), &max_zero));
        assert!(!matches_filter(&record("x"), &max_zero));
    }
}
