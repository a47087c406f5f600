//! Storage layer: in-memory store and snapshot persistence.
//!
//! Records live in-memory in a [`Store`] keyed by content fingerprint, with
//! thread-safe concurrent access. Durability is provided by bincode snapshots
//! (atomic temp-file + rename).

/// Disk persistence: snapshot save/load with atomic writes.
pub mod persistence;

pub use persistence::{load_store, save_store};

use crate::analysis;
use crate::error::StoreError;
use crate::filter::{matches_filter, FilterSpec};
use crate::record::AnalyzedString;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Internal store data, protected by a `RwLock`.
///
/// Records are keyed by their SHA-256 content fingerprint, which makes
/// duplicate detection a single map lookup.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreData {
    pub strings: HashMap<String, AnalyzedString>,
}

/// Thread-safe in-memory store of analyzed strings.
///
/// Cheap to clone; clones share the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub data: Arc<RwLock<StoreData>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze and insert a value.
    ///
    /// Fails with [`StoreError::Duplicate`] when a value with the same
    /// content fingerprint is already stored.
    pub fn insert(&self, value: &str) -> Result<AnalyzedString, StoreError> {
        let record = AnalyzedString::analyze(value);
        let mut data = self.data.write();
        if data.strings.contains_key(&record.hash) {
            return Err(StoreError::Duplicate);
        }
        data.strings.insert(record.hash.clone(), record.clone());
        Ok(record)
    }

    /// Look up a record by its raw value.
    pub fn get(&self, value: &str) -> Option<AnalyzedString> {
        let hash = analysis::fingerprint(value);
        self.data.read().strings.get(&hash).cloned()
    }

    /// Remove a record by its raw value.
    pub fn remove(&self, value: &str) -> Result<(), StoreError> {
        let hash = analysis::fingerprint(value);
        match self.data.write().strings.remove(&hash) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }

    /// All records satisfying the spec, newest first.
    ///
    /// Ties on `created_at` are broken by fingerprint so the ordering is
    /// stable across calls.
    pub fn find(&self, spec: &FilterSpec) -> Vec<AnalyzedString> {
        let data = self.data.read();
        let mut matches: Vec<AnalyzedString> = data
            .strings
            .values()
            .filter(|record| matches_filter(record, spec))
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.hash.cmp(&b.hash))
        });
        matches
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.data.read().strings.len()
    }

    /// `true` when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.data.read().strings.is_empty()
    }
}
