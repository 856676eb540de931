// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence for the counter.
//!
//! The counter never talks to the filesystem directly; it goes through
//! [`KeyValueStore`], so tests can run against [`MemoryStore`] while the
//! application uses [`FileStore`].

mod file;

pub use file::FileStore;

use crate::error::Result;
use std::collections::HashMap;

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Returns the text stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Volatile store used by tests and `--ephemeral` sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get("contador"), None);
    }

    #[test]
    fn memory_store_set_overwrites() {
        let mut store = MemoryStore::new().with_entry("contador", "1");
        store.set("contador", "2").unwrap();
        assert_eq!(store.get("contador").as_deref(), Some("2"));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
