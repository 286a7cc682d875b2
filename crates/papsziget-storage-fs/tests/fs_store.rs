// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! State directory behaviour, alone and under a webshop `Store`.

use std::path::Path;

use papsziget_app_core::persist::STORAGE_KEY;
use papsziget_app_core::storage::{KeyValueStore, StorageError};
use papsziget_app_core::{Action, Catalog, Store, ThemeMode};
use papsziget_storage_fs::StateDir;

fn record_path(dir: &Path) -> std::path::PathBuf {
    dir.join(format!("{STORAGE_KEY}.json"))
}

#[test]
fn missing_record_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let state = StateDir::at(dir.path()).unwrap();
    let loaded = state.load_raw(STORAGE_KEY);
    assert!(matches!(loaded, Err(StorageError::NotFound)));
}

#[test]
fn save_replaces_record_file_without_leftovers() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("nested");
    let state = StateDir::at(&base).unwrap();
    state.save_raw(STORAGE_KEY, b"{}").unwrap();
    state.save_raw(STORAGE_KEY, b"{\"cart\":[]}").unwrap();
    let on_disk = std::fs::read(record_path(&base)).unwrap();
    assert_eq!(on_disk, b"{\"cart\":[]}");
    let files = std::fs::read_dir(&base).unwrap().count();
    assert_eq!(files, 1);
}

#[test]
fn keys_that_escape_the_directory_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let state = StateDir::at(dir.path()).unwrap();
    for key in ["", "../cart", "a/b", ".hidden"] {
        let err = state.save_raw(key, b"{}").unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)), "key {key:?}");
    }
}

#[test]
fn webshop_state_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let item = Catalog::builtin().get("E5R7P1").cloned().unwrap();
    {
        let mut shop = Store::open(StateDir::at(dir.path()).unwrap());
        shop.dispatch(Action::add_to_cart(item.clone()));
        shop.dispatch(Action::ToggleTheme);
    }
    assert!(record_path(dir.path()).exists());

    let shop = Store::open(StateDir::at(dir.path()).unwrap());
    let state = shop.current_state();
    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart[0].object, item);
    assert_eq!(state.theme.mode, ThemeMode::Dark);
}

#[test]
fn corrupt_file_opens_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = record_path(dir.path());
    std::fs::write(path, "{ truncated").unwrap();
    let shop = Store::open(StateDir::at(dir.path()).unwrap());
    assert!(shop.current_state().cart.is_empty());
}
