//! Analyzed string record type.
//!
//! An [`AnalyzedString`] is the primary unit of storage: the raw value plus the
//! derived attributes the filter engine evaluates against. The SHA-256 hash is
//! the record's identity and deduplication key.

use crate::analysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored string value with its derived attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedString {
    /// The raw stored value.
    pub value: String,
    /// Character length (Unicode scalar values).
    pub length: usize,
    /// Case-insensitive palindrome flag over alphanumeric characters.
    pub is_palindrome: bool,
    /// Number of distinct alphanumeric characters, case-insensitive.
    pub unique_characters: usize,
    /// Number of alphanumeric word runs.
    pub word_count: usize,
    /// SHA-256 hex digest of the value — the content fingerprint.
    pub hash: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl AnalyzedString {
    /// Analyzes a value, computing every derived attribute.
    pub fn analyze(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            length: analysis::character_count(&value),
            is_palindrome: analysis::is_palindrome(&value),
            unique_characters: analysis::count_unique_characters(&value),
            word_count: analysis::count_words(&value),
            hash: analysis::fingerprint(&value),
            created_at: Utc::now(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_fills_all_attributes() {
        let record = AnalyzedString::analyze("Race car");
        assert_eq!(record.value, "Race car");
        assert_eq!(record.length, 8);
        assert!(record.is_palindrome);
        assert_eq!(record.word_count, 2);
        assert_eq!(record.unique_characters, 4); // r, a, c, e
        assert_eq!(record.hash.len(), 64);
    }

    #[test]
    fn identical_values_share_a_fingerprint() {
        let a = AnalyzedString::analyze("same");
        let b = AnalyzedString::analyze("same");
        assert_eq!(a.hash, b.hash);
    }
}
