//! # stringdb-core
//!
//! Embeddable string analysis engine: per-string derived metrics, filter
//! specifications with three-state optional criteria, a deterministic
//! natural-language filter interpreter, and an in-memory deduplicating store.
//!
//! This is the core library crate with zero async dependencies — suitable for
//! embedding directly in Rust or behind any transport layer.

/// Per-string metric computations: length, palindrome check, word and
/// unique-character counts, frequency map, and the SHA-256 content fingerprint.
pub mod analysis;
/// Compile-time constants: limits and server defaults.
pub mod config;
/// Error taxonomy: interpreter, validator, and store errors.
pub mod error;
/// Filter specification, predicate evaluation, and conflict validation.
pub mod filter;
/// Natural-language query interpreter.
pub mod query;
/// Analyzed string record type.
pub mod record;
/// Storage layer: in-memory store and snapshot persistence.
pub mod storage;
