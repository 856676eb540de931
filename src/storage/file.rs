// SPDX-License-Identifier: MPL-2.0
//! File-backed store using CBOR format.
//!
//! Entries are kept in memory and the whole map is rewritten to
//! `storage.cbor` on every [`KeyValueStore::set`], so a write is durable
//! before the call returns.
//!
//! # Path Resolution
//!
//! 1. `base_dir` passed to [`FileStore::load_from`]
//! 2. `--data-dir` CLI argument
//! 3. `ICED_COUNTER_DATA_DIR` environment variable
//! 4. Platform-specific data directory

use super::KeyValueStore;
use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Store file name within the app data directory.
const STORE_FILE: &str = "storage.cbor";

#[derive(Debug, Clone, Default)]
pub struct FileStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at the default location.
    ///
    /// Returns the store and an optional notification key describing why
    /// previously saved data could not be used.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Opens the store in a custom directory.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file also
    /// yields an empty store, plus a warning key; the next `set` replaces it.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::data_dir(base_dir).map(|mut path| {
            path.push(STORE_FILE);
            path
        });

        let Some(path) = path else {
            tracing::warn!("no data directory available, counter will not persist");
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::at(path), None);
        }

        match read_entries(&path) {
            Ok(entries) => {
                tracing::debug!(path = %path.display(), entries = entries.len(), "store loaded");
                (
                    Self {
                        path: Some(path),
                        entries,
                    },
                    None,
                )
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "discarding unreadable store");
                (
                    Self::at(path),
                    Some("notification-storage-load-error".to_string()),
                )
            }
        }
    }

    fn at(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            entries: BTreeMap::new(),
        }
    }

    /// Location of the backing file, if one could be resolved.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let file = fs::File::open(path)?;
    let entries = ciborium::from_reader(BufReader::new(file))?;
    Ok(entries)
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(fs::File::create(path)?);
    ciborium::into_writer(entries, &mut writer)?;
    writer.flush()?;
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        let Some(path) = &self.path else {
            return Err(Error::Storage("no data directory".to_string()));
        };
        write_entries(path, &self.entries)
    }
}
