//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling via
//! Axum. Filter types come from `stringdb-core` so both query paths share the
//! same three-state presence encoding.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stringdb_core::analysis;
use stringdb_core::filter::{FilterSpec, FilterValue};
use stringdb_core::record::AnalyzedString;

/// Request body for `POST /strings`.
#[derive(Debug, Deserialize)]
pub struct UploadStringRequest {
    pub value: String,
}

/// Derived attributes of a stored string, nested in record responses.
#[derive(Debug, Serialize)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// A stored record as returned by the API. The record's `id` is its
/// content fingerprint.
#[derive(Debug, Serialize)]
pub struct StringResponse {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: String,
}

impl StringResponse {
    pub fn from_record(record: &AnalyzedString) -> Self {
        Self {
            id: record.hash.clone(),
            value: record.value.clone(),
            properties: StringProperties {
                length: record.length,
                is_palindrome: record.is_palindrome,
                unique_characters: record.unique_characters,
                word_count: record.word_count,
                sha256_hash: record.hash.clone(),
                character_frequency_map: analysis::character_frequency_map(&record.value),
            },
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// Query parameters for `GET /strings`.
///
/// Every field is optional; an absent parameter leaves its criterion
/// unconstrained, which is distinct from an explicit `false` or `0`.
#[derive(Debug, Deserialize)]
pub struct StructuredFilterParams {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub word_count: Option<usize>,
    pub contains_character: Option<String>,
}

impl StructuredFilterParams {
    /// Convert to a [`FilterSpec`], rejecting a multi-character
    /// `contains_character` value.
    pub fn into_spec(self) -> Result<FilterSpec, String> {
        let contains_character = match self.contains_character {
            None => None,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => return Err("contains_character must be a single character".to_string()),
                }
            }
        };
        Ok(FilterSpec {
            is_palindrome: self.is_palindrome,
            min_length: self.min_length,
            max_length: self.max_length,
            word_count: self.word_count,
            contains_character,
        })
    }
}

/// Response body for `GET /strings`.
#[derive(Debug, Serialize)]
pub struct FilteredResponse {
    pub count: usize,
    pub data: Vec<StringResponse>,
    pub filters_applied: FilterSpec,
}

/// Query parameters for `GET /strings/filter-by-natural-language`.
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// Echo of the interpreted query: the raw text plus the criteria that fired.
#[derive(Debug, Serialize)]
pub struct InterpretedQueryBody {
    pub original: String,
    pub parsed_filters: BTreeMap<&'static str, FilterValue>,
}

/// Response body for `GET /strings/filter-by-natural-language`.
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    pub interpreted_query: InterpretedQueryBody,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub strings_count: usize,
}
