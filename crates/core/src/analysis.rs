//! Per-string metric computations.
//!
//! All functions are pure, single-pass, and operate on Unicode scalar values.
//! Palindrome, word, and uniqueness checks consider alphanumeric characters
//! only and are case-insensitive.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::collections::HashSet;

/// Number of characters (Unicode scalar values, not bytes) in the string.
pub fn character_count(s: &str) -> usize {
    s.chars().count()
}

/// Case-insensitive palindrome check over alphanumeric characters only.
///
/// Punctuation and whitespace are ignored, so `"A man, a plan"` is judged on
/// `"amanaplan"`. The empty string is a palindrome.
pub fn is_palindrome(s: &str) -> bool {
    let filtered: Vec<char> = s
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();
    filtered.iter().eq(filtered.iter().rev())
}

/// Number of words, where a word is a maximal run of alphanumeric characters.
pub fn count_words(s: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else {
            in_word = false;
        }
    }
    count
}

/// Number of distinct alphanumeric characters, case-insensitive.
pub fn count_unique_characters(s: &str) -> usize {
    let mut seen = HashSet::new();
    for c in s.to_lowercase().chars() {
        if c.is_alphanumeric() {
            seen.insert(c);
        }
    }
    seen.len()
}

/// Frequency of each alphanumeric character, case-insensitive.
pub fn character_frequency_map(s: &str) -> BTreeMap<char, usize> {
    let mut frequencies = BTreeMap::new();
    for c in s.to_lowercase().chars() {
        if c.is_alphanumeric() {
            *frequencies.entry(c).or_insert(0) += 1;
        }
    }
    frequencies
}

/// SHA-256 hex digest of the value. Used as identity and for deduplication.
pub fn fingerprint(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    hex::encode(digest)
}
