//! Natural-language filter interpreter.
//!
//! Turns an unstructured phrase like `"single word palindromes longer than 3
//! characters"` into a [`FilterSpec`] plus a trace of which criteria fired.
//! The interpreter is a fixed, deterministic rule set over literal phrases and
//! numeric patterns — no grammar, no learning. Matching is case-insensitive
//! and order-independent across criteria: recognizing one criterion never
//! prevents recognizing another in the same query.

use crate::error::FilterError;
use crate::filter::{FilterSpec, FilterValue};
use std::collections::BTreeMap;

mod rules;
use rules::{Criterion, CRITERIA};

/// The outcome of interpreting a natural-language query.
#[derive(Debug, Clone)]
pub struct InterpretedQuery {
    /// The structured specification the storage layer evaluates.
    pub spec: FilterSpec,
    /// Which criteria fired, keyed by canonical name, holding the resolved
    /// (post-conversion) value. Echoed verbatim to the caller.
    pub trace: BTreeMap<&'static str, FilterValue>,
}

/// Interpret a raw query into a filter specification.
///
/// The input is trimmed and lowercased, then each criterion's rule table is
/// tried independently (first match wins per criterion). Fails with
/// [`FilterError::NoFiltersRecognized`] when zero criteria fire — an empty
/// specification is never silently accepted from natural-language input.
pub fn interpret(raw: &str) -> Result<InterpretedQuery, FilterError> {
    let query = raw.trim().to_lowercase();
    let mut spec = FilterSpec::default();
    let mut trace = BTreeMap::new();

    for criterion in &CRITERIA {
        let Some(value) = criterion.recognize(&query) else {
            continue;
        };
        match (criterion, &value) {
            (Criterion::Palindrome, FilterValue::Bool(b)) => spec.is_palindrome = Some(*b),
            (Criterion::WordCount, FilterValue::Count(n)) => spec.word_count = Some(*n),
            (Criterion::MinLength, FilterValue::Count(n)) => spec.min_length = Some(*n),
            (Criterion::MaxLength, FilterValue::Count(n)) => spec.max_length = Some(*n),
            (Criterion::ContainsCharacter, FilterValue::Char(c)) => {
                spec.contains_character = Some(*c)
            }
            // Rule tables only produce values of their criterion's type.
            _ => unreachable!("rule table produced a mismatched value type"),
        }
        trace.insert(criterion.name(), value);
    }

    if spec.is_empty() {
        return Err(FilterError::NoFiltersRecognized);
    }
    Ok(InterpretedQuery { spec, trace })
}
