//! Compile-time constants: input validation limits and server defaults.
//!
//! Runtime configuration is handled via CLI arguments in the server crate.

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 3030;

/// Default directory for snapshot files.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default interval (in seconds) between automatic snapshots. 0 = disabled.
pub const DEFAULT_SNAPSHOT_INTERVAL_SECS: u64 = 300;

/// Graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Maximum length of an uploaded string value in bytes.
pub const MAX_VALUE_BYTES: usize = 1_000_000;

/// Maximum length of a natural-language query in characters.
pub const MAX_QUERY_LEN: usize = 1_024;

/// Snapshot file name inside the data directory.
pub const SNAPSHOT_FILE: &str = "strings.snapshot";
