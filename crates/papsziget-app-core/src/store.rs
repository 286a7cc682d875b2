// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The webshop store: owns [`WebshopState`], applies actions, persists the
//! durable projection.
//!
//! A store is an ordinary value. Construct one at application entry, pass
//! `&mut Store` to whatever dispatches, drop it on teardown.

use tracing::{debug, info, warn};

use crate::action::Action;
use crate::persist::{rehydrate, PersistedState};
use crate::reduce::reduce;
use crate::render_port::RenderPort;
use crate::state::WebshopState;
use crate::storage::{KeyValueStore, RecordStorage};

/// Single owner of the webshop state.
pub struct Store<S> {
    state: WebshopState,
    storage: RecordStorage<S>,
    persisted: PersistedState,
    render: Option<Box<dyn RenderPort>>,
}

impl<S> Store<S>
where
    S: KeyValueStore,
{
    /// Open a store over `storage`, restoring cart and theme if a readable
    /// record exists. Never fails: unreadable storage yields the default state.
    pub fn open(storage: S) -> Self {
        let storage = RecordStorage::new(storage);
        let record = match storage.load_record() {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "discarding unreadable webshop record");
                None
            }
        };
        let state = rehydrate(record);
        if !state.cart.is_empty() || state.theme != WebshopState::default().theme {
            info!(
                lines = state.cart.len(),
                theme = ?state.theme.mode,
                "restored webshop state"
            );
        }
        let persisted = PersistedState::of(&state);
        Self {
            state,
            storage,
            persisted,
            render: None,
        }
    }

    /// Attach a render hook, called after every dispatch that changed state.
    #[must_use]
    pub fn with_render_port(mut self, port: Box<dyn RenderPort>) -> Self {
        self.render = Some(port);
        self
    }

    /// Replace the render hook on an already-open store.
    pub fn set_render_port(&mut self, port: Box<dyn RenderPort>) {
        self.render = Some(port);
    }

    /// Latest state. Read-only; all mutation goes through [`Store::dispatch`].
    pub fn current_state(&self) -> &WebshopState {
        &self.state
    }

    /// Apply `action`, then persist and notify if anything changed.
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, action);
        if next == self.state {
            return;
        }
        self.state = next;
        self.persist();
        if let Some(render) = &self.render {
            render.request_render();
        }
    }

    /// Decode a JSON action and dispatch it. Unknown actions are ignored.
    pub fn dispatch_json(&mut self, raw: &str) {
        if let Some(action) = Action::from_json(raw) {
            self.dispatch(action);
        } else {
            debug!(action = raw, "ignoring unrecognised action");
        }
    }

    /// Borrow the backing store.
    pub fn storage(&self) -> &S {
        self.storage.store()
    }

    /// Tear down the store and return the backing store.
    pub fn into_storage(self) -> S {
        self.storage.into_inner()
    }

    fn persist(&mut self) {
        let snapshot = PersistedState::of(&self.state);
        if snapshot == self.persisted {
            return;
        }
        if let Err(err) = self.storage.save_record(&snapshot) {
            warn!(error = %err, "webshop state not persisted");
        }
        // In-memory state stays authoritative even when the write failed.
        self.persisted = snapshot;
    }
}
