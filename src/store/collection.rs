//! One file-backed collection: a named map of key → record.
//!
//! Load is lenient — a missing or malformed file yields the empty map, exactly
//! as the original prototype behaved on first run. Corruption is logged at
//! WARN so the silent-reset hazard is at least visible. Persist is strict —
//! every I/O or serialization failure propagates to the caller.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::StoreError;

/// A named map of key → record, mirrored to a single JSON object file.
#[derive(Debug)]
pub struct JsonCollection<T> {
    name: &'static str,
    path: PathBuf,
    records: HashMap<String, T>,
}

impl<T: Serialize + DeserializeOwned> JsonCollection<T> {
    /// Load a collection from its file.
    ///
    /// Missing file → empty map (first run). Malformed file → empty map, with
    /// a WARN naming the file and parse error. Whether the original's silent
    /// reset on corruption was intended is unclear; behavior is kept but no
    /// longer silent.
    pub fn load(path: &Path, name: &'static str) -> Self {
        let records = match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<HashMap<String, T>>(&data) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(
                        collection = name,
                        path = %path.display(),
                        error = %e,
                        "Collection file is malformed — starting from an empty collection"
                    );
                    HashMap::new()
                }
            },
            Err(e) => {
                // Only a missing file is a normal first run; any other read
                // failure is the same data-loss hazard as corruption.
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        collection = name,
                        path = %path.display(),
                        error = %e,
                        "Collection file could not be read — starting from an empty collection"
                    );
                }
                HashMap::new()
            }
        };

        Self {
            name,
            path: path.to_path_buf(),
            records,
        }
    }

    /// Write the whole collection back to its file (full-file overwrite).
    pub fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.records.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Insert a record, returning the one it replaced (if any).
    pub fn insert(&mut self, key: String, record: T) -> Option<T> {
        self.records.insert(key, record)
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.records.remove(key)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
