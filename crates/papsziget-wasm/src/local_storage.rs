// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `window.localStorage` as a [`KeyValueStore`].
//!
//! Values are stored as UTF-8 strings. A missing window, storage disabled by
//! the browser, or a throwing getter all surface as
//! [`StorageError::Unavailable`]; the store treats that as "no persistence".
//! A throwing setter (quota) is [`StorageError::Rejected`].

use papsziget_app_core::storage::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

/// Handle on the page's local storage, if the browser grants one.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Resolve `window.localStorage`. Never fails; an unavailable storage is
    /// remembered and reported on each access.
    pub fn open() -> Self {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten());
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().ok_or_else(no_local_storage)
    }
}

fn no_local_storage() -> StorageError {
    StorageError::Unavailable("localStorage not available".into())
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for LocalStorage {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let value = self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe(&e)))?;
        value.map(String::into_bytes).ok_or(StorageError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| StorageError::Rejected(e.to_string()))?;
        self.storage()?
            .set_item(key, text)
            .map_err(|e| StorageError::Rejected(describe(&e)))
    }
}
