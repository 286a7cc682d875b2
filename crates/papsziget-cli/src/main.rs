// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `papsziget`: terminal storefront over the webshop store.
//!
//! Cart and theme survive between runs in `papsziget-webshop-state.json`
//! under the user data dir, or under `--state-dir`.

mod cli;
mod commands;
mod render;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use papsziget_app_core::storage::{KeyValueStore, MemoryStore};
use papsziget_app_core::Store;
use papsziget_storage_fs::StateDir;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn open_storage(cli: &Cli) -> Box<dyn KeyValueStore> {
    let dir = match &cli.state_dir {
        Some(path) => StateDir::at(path),
        None => StateDir::new(),
    };
    match dir {
        Ok(store) => {
            debug!(dir = %store.base().display(), "state directory");
            Box::new(store)
        }
        Err(err) => {
            warn!(%err, "state directory unavailable; cart will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut store = Store::open(open_storage(&cli));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &mut store, &mut out)?;
    out.flush()?;
    Ok(())
}
