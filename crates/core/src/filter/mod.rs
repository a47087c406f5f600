//! Filter specification types for selecting stored strings.
//!
//! A [`FilterSpec`] is the canonical structured query produced by both the
//! structured-parameter path and the natural-language interpreter, and
//! evaluated by the store. Every criterion is independently optional:
//! `None` means "unconstrained" and is distinct from an explicit `false`
//! or `0` — the three-state encoding the whole pipeline depends on.

use serde::{Deserialize, Serialize};

/// Predicate evaluation against analyzed records.
pub mod predicate;
/// Cross-field conflict validation.
pub mod validate;

pub use predicate::matches_filter;
pub use validate::validate;

/// Structured query with five independent, optional criteria.
///
/// Fields are combined with logical AND; there is no OR or negation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Required palindrome state. `None` = unconstrained.
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on character length.
    pub min_length: Option<usize>,
    /// Inclusive upper bound on character length.
    pub max_length: Option<usize>,
    /// Exact required word count.
    pub word_count: Option<usize>,
    /// The value must contain this character (case-insensitive).
    pub contains_character: Option<char>,
}

impl FilterSpec {
    /// `true` if no criterion is present — such a spec matches everything.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }
}

/// A resolved criterion value, as echoed back in interpreter traces.
///
/// Serializes untagged so traces render as plain JSON scalars
/// (`true`, `3`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Boolean criterion value.
    Bool(bool),
    /// Numeric criterion value (lengths, word counts).
    Count(usize),
    /// Single-character criterion value.
    Char(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_empty() {
        assert!(FilterSpec::default().is_empty());
    }

    #[test]
    fn explicit_false_is_not_absent() {
        let spec = FilterSpec {
            is_palindrome: Some(false),
            ..Default::default()
        };
        assert!(!spec.is_empty());
    }

    #[test]
    fn explicit_zero_is_not_absent() {
        let spec = FilterSpec {
            min_length: Some(0),
            ..Default::default()
        };
        assert!(!spec.is_empty());
    }

    #[test]
    fn filter_values_serialize_as_scalars() {
        assert_eq!(
            serde_json::to_string(&FilterValue::Bool(true)).unwrap(),
            "true"
        );
        assert_eq!(serde_json::to_string(&FilterValue::Count(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&FilterValue::Char('z')).unwrap(),
            "\"z\""
        );
    }
}
