// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Where the webshop record lives between sessions.
//!
//! Hosts provide a [`KeyValueStore`] (browser `localStorage`, a state
//! directory, memory); [`RecordStorage`] reads and writes the cart/theme
//! record under [`STORAGE_KEY`] as compact JSON.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use thiserror::Error;

use crate::persist::{PersistedState, StoredRecord, STORAGE_KEY};

/// Raw blobs under string keys, as `localStorage` exposes them.
pub trait KeyValueStore {
    /// Bytes stored under `key`, or [`StorageError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StorageError>;
    /// Replace whatever is stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        (**self).save_raw(key, data)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        (**self).save_raw(key, data)
    }
}

/// Why the webshop record could not be read or written.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Nothing stored under the key yet.
    #[error("no stored webshop record")]
    NotFound,
    /// Host storage missing, disabled, or threw on access.
    #[error("state storage unavailable: {0}")]
    Unavailable(String),
    /// Host refused the write (quota, invalid bytes).
    #[error("state storage rejected the record: {0}")]
    Rejected(String),
    /// Reading or writing the state file failed.
    #[error("state file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Stored bytes are not a webshop record.
    #[error("stored webshop record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The cart/theme record over a [`KeyValueStore`].
pub struct RecordStorage<S> {
    store: S,
}

impl<S> RecordStorage<S> {
    /// Wrap `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> RecordStorage<S>
where
    S: KeyValueStore,
{
    /// Read the stored record. A missing key or an empty value is `Ok(None)`.
    pub fn load_record(&self) -> Result<Option<StoredRecord>, StorageError> {
        let bytes = match self.store.load_raw(STORAGE_KEY) {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Write `record` as compact JSON, replacing the previous one.
    pub fn save_record(&self, record: &PersistedState) -> Result<(), StorageError> {
        let data = serde_json::to_vec(record)?;
        self.store.save_raw(STORAGE_KEY, &data)
    }
}

/// In-process store; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry.
    pub fn with_entry(key: &str, data: impl Into<Vec<u8>>) -> Self {
        let entries = BTreeMap::from([(key.to_owned(), data.into())]);
        Self {
            entries: RefCell::new(entries),
        }
    }

    /// Raw bytes currently held under `key`.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.entries
            .borrow()
            .get(key)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::state::{ThemeMode, ThemeState, WebshopState};

    #[test]
    fn missing_and_empty_records_load_as_none() {
        let absent = RecordStorage::new(MemoryStore::new());
        assert!(matches!(absent.load_record(), Ok(None)));
        let empty = MemoryStore::with_entry(STORAGE_KEY, Vec::new());
        assert!(matches!(RecordStorage::new(empty).load_record(), Ok(None)));
    }

    #[test]
    fn save_writes_compact_json_under_the_fixed_key() {
        let storage = RecordStorage::new(MemoryStore::new());
        let mut state = WebshopState::default();
        state.theme = ThemeState {
            mode: ThemeMode::Dark,
        };
        storage.save_record(&PersistedState::of(&state)).unwrap();
        let raw = storage.store().get(STORAGE_KEY).unwrap();
        assert_eq!(raw, br#"{"cart":[],"theme":{"mode":"dark"}}"#.to_vec());
        let record = storage.load_record().unwrap().unwrap();
        assert_eq!(record.theme, Some(state.theme));
    }

    #[test]
    fn garbage_bytes_are_reported_as_malformed() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "not json");
        let err = RecordStorage::new(store).load_record().unwrap_err();
        assert!(matches!(err, StorageError::Malformed(_)));
        assert!(err.to_string().starts_with("stored webshop record"));
    }
}
