//! Disk persistence for the store using bincode serialization.
//!
//! The store is serialized to a single snapshot file. Writes use atomic
//! temp-file + rename to prevent corruption on crash, and a CRC32 checksum is
//! appended as a footer for integrity verification on load.

use crate::config;
use crate::error::StoreError;
use crate::storage::{Store, StoreData};
use parking_lot::RwLock;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Magic bytes preceding the CRC32 footer.
const SNAPSHOT_CRC_MAGIC: &[u8; 4] = b"SDB1";

/// Save the store to `<dir>/strings.snapshot` with an atomic write.
///
/// Layout: `[bincode payload][magic 4 bytes][CRC32 4 bytes BE]`.
pub fn save_store(store: &Store, dir: &str) -> Result<(), StoreError> {
    let data = store.data.read();
    let bytes = bincode::serialize(&*data).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    let crc = crc32fast::hash(&bytes);

    fs::create_dir_all(dir)?;
    let path = Path::new(dir).join(config::SNAPSHOT_FILE);
    let tmp_path = Path::new(dir).join(format!("{}.tmp", config::SNAPSHOT_FILE));

    let mut output = Vec::with_capacity(bytes.len() + 8);
    output.extend_from_slice(&bytes);
    output.extend_from_slice(SNAPSHOT_CRC_MAGIC);
    output.extend_from_slice(&crc.to_be_bytes());

    fs::write(&tmp_path, &output)?;
    fs::rename(&tmp_path, &path)?;

    tracing::info!(
        "Saved {} strings ({} bytes, CRC32={:#010x})",
        data.strings.len(),
        bytes.len(),
        crc
    );
    Ok(())
}

/// Load a store from `<dir>/strings.snapshot`, verifying the CRC32 footer.
///
/// A missing snapshot file yields an empty store; a present but corrupt one
/// is an error so the operator can decide rather than silently losing data.
pub fn load_store(dir: &str) -> Result<Store, StoreError> {
    let path = Path::new(dir).join(config::SNAPSHOT_FILE);
    if !path.exists() {
        return Ok(Store::new());
    }

    let raw = fs::read(&path)?;
    if raw.len() < 8 || &raw[raw.len() - 8..raw.len() - 4] != SNAPSHOT_CRC_MAGIC {
        return Err(StoreError::Corrupt(format!(
            "snapshot {:?} is missing its CRC32 footer",
            path
        )));
    }
    let payload = &raw[..raw.len() - 8];
    let stored_crc = u32::from_be_bytes([
        raw[raw.len() - 4],
        raw[raw.len() - 3],
        raw[raw.len() - 2],
        raw[raw.len() - 1],
    ]);
    let computed_crc = crc32fast::hash(payload);
    if computed_crc != stored_crc {
        return Err(StoreError::Corrupt(format!(
            "snapshot CRC32 mismatch: expected {:#010x}, got {:#010x} ({:?})",
            stored_crc, computed_crc, path
        )));
    }

    let data: StoreData =
        bincode::deserialize(payload).map_err(|e| StoreError::Corrupt(e.to_string()))?;

    tracing::info!("Loaded {} strings from snapshot", data.strings.len());

    Ok(Store {
        data: Arc::new(RwLock::new(data)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let dir_str = dir.path().to_str().unwrap();

        let store = Store::new();
        store.insert("racecar").unwrap();
        store.insert("hello world").unwrap();
        save_store(&store, dir_str).unwrap();

        let loaded = load_store(dir_str).unwrap();
        assert_eq!(loaded.len(), 2);
        let record = loaded.get("racecar").unwrap();
        assert!(record.is_palindrome);
    }

    #[test]
    fn missing_snapshot_yields_empty_store() {
        let dir = TempDir::new().unwrap();
        let loaded = load_store(dir.path().to_str().unwrap()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_snapshot_is_rejected() {
        let dir = TempDir::new().unwrap();
        let dir_str = dir.path().to_str().unwrap();

        let store = Store::new();
        store.insert("value").unwrap();
        save_store(&store, dir_str).unwrap();

        let path = dir.path().join(crate::config::SNAPSHOT_FILE);
        let mut bytes = fs::read(&path).unwrap();
        bytes[0] ^= 0xff;
        fs::write(&path, &bytes).unwrap();

        assert!(matches!(
            load_store(dir_str),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn truncated_snapshot_is_rejected() {
        let dir = TempDir::new().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let path = dir.path().join(crate::config::SNAPSHOT_FILE);
        fs::write(&path, b"abc").unwrap();

        assert!(matches!(
            load_store(dir_str),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let dir_str = dir.path().to_str().unwrap();

        let store = Store::new();
        store.insert("first").unwrap();
        save_store(&store, dir_str).unwrap();
        store.insert("second").unwrap();
        save_store(&store, dir_str).unwrap();

        let loaded = load_store(dir_str).unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
