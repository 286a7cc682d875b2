// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Webshop state directory for native Papsziget front ends.
//!
//! The cart/theme record is kept as `papsziget-webshop-state.json` in the
//! per-user data directory, or in a directory chosen by the caller. A write
//! goes to a sibling `.tmp` file first and is renamed over the record, so an
//! interrupted write leaves the previous cart in place.

use directories::ProjectDirs;
use papsziget_app_core::storage::{KeyValueStore, StorageError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory holding one `<key>.json` file per stored record.
pub struct StateDir {
    base: PathBuf,
}

impl StateDir {
    /// The per-user webshop state directory (e.g. `~/.local/share/papsziget`).
    ///
    /// # Errors
    ///
    /// `Unavailable` when no home directory can be resolved; `Io` when the
    /// directory cannot be created.
    pub fn new() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("hu", "papsziget", "Papsziget")
            .ok_or_else(no_home)?;
        Self::at(dirs.data_dir())
    }

    /// Keep webshop state in `base`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory cannot be created.
    pub fn at(base: impl AsRef<Path>) -> Result<Self, StorageError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory the record files live in.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let plain = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(['/', '\\']);
        if !plain {
            return Err(StorageError::Rejected(format!(
                "record key {key:?} is not a plain file name"
            )));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

fn no_home() -> StorageError {
    StorageError::Unavailable("no home directory for webshop state".into())
}

impl KeyValueStore for StateDir {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        match fs::read(self.path_for(key)?) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(StorageError::NotFound),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let staged = path.with_extension("json.tmp");
        fs::create_dir_all(&self.base)?;
        fs::write(&staged, data)?;
        fs::rename(&staged, &path)?;
        Ok(())
    }
}
