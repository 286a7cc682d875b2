// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! wasm-bindgen bindings for the Papsziget webshop store.
//!
//! The browser page owns exactly one [`WebshopApp`]; it reads state to render
//! and sends actions back through `dispatch`. Cart and theme persist in
//! `localStorage` under `papsziget-webshop-state`.
//!
//! ```js
//! import init, { WebshopApp } from 'papsziget-wasm';
//!
//! await init();
//! const app = new WebshopApp();
//! app.setOnChange(() => render(JSON.parse(app.stateJson())));
//! app.addToCart("A3F9Z1");
//! app.dispatch(JSON.stringify({ type: "SET_CHECKOUT_STEP", step: "adatok" }));
//! ```
#![deny(missing_docs)]

use papsziget_app_core::catalog::{PAYMENT_OPTIONS, SHIPPING_OPTIONS};
use papsziget_app_core::checkout::{self, CheckoutSummary, ART_NOTICE};
use papsziget_app_core::storage::KeyValueStore;
use papsziget_app_core::{Action, Catalog, CheckoutStep, Store, WebshopState};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

#[cfg(feature = "console-panic")]
#[wasm_bindgen(start)]
/// Initialize console panic hook for better error messages in browser.
pub fn init_console_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| fallback.to_owned())
}

/// Browser-facing handle over a webshop [`Store`].
#[wasm_bindgen]
pub struct WebshopApp {
    store: Store<Box<dyn KeyValueStore>>,
}

impl Default for WebshopApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WebshopApp {
    /// Open the store over the page's local storage (in-memory off the web).
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        let storage: Box<dyn KeyValueStore> = Box::new(LocalStorage::open());
        #[cfg(not(target_arch = "wasm32"))]
        let storage: Box<dyn KeyValueStore> =
            Box::new(papsziget_app_core::storage::MemoryStore::new());
        Self::with_storage(storage)
    }

    /// Apply a JSON-encoded action. Unrecognised actions are ignored.
    pub fn dispatch(&mut self, action_json: &str) {
        self.store.dispatch_json(action_json);
    }

    /// Add one unit of the catalog item `id`. Returns `false` for unknown ids.
    #[wasm_bindgen(js_name = addToCart)]
    pub fn add_to_cart(&mut self, id: &str) -> bool {
        let Some(item) = Catalog::builtin().get(id) else {
            return false;
        };
        self.store.dispatch(Action::add_to_cart(item.clone()));
        true
    }

    /// Remove the cart line for `id` (no-op if absent).
    #[wasm_bindgen(js_name = removeFromCart)]
    pub fn remove_from_cart(&mut self, id: &str) {
        self.store.dispatch(Action::remove_from_cart(id));
    }

    /// Flip light/dark mode.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) {
        self.store.dispatch(Action::ToggleTheme);
    }

    /// Move to the next step if its gates pass. Returns whether it moved.
    pub fn advance(&mut self) -> bool {
        let Some(next) = checkout::advance_target(self.store.current_state()) else {
            return false;
        };
        self.store.dispatch(Action::set_step(next));
        true
    }

    /// Move to the previous step (always allowed). Returns whether it moved.
    pub fn back(&mut self) -> bool {
        let Some(prev) = self.store.current_state().checkout.step.previous() else {
            return false;
        };
        self.store.dispatch(Action::set_step(prev));
        true
    }

    /// Leave the closing notice: empty the cart and return to the cart step.
    #[wasm_bindgen(js_name = finishCheckout)]
    pub fn finish_checkout(&mut self) {
        self.store.dispatch(Action::ClearCart);
        self.store.dispatch(Action::set_step(CheckoutStep::Cart));
    }

    /// Whole state as JSON.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        to_json(self.store.current_state(), "{}")
    }

    /// Current checkout step wire name.
    #[wasm_bindgen(js_name = currentStep)]
    pub fn current_step(&self) -> String {
        let step = self.store.current_state().checkout.step;
        step.as_str().to_owned()
    }

    /// Whether the current step's forward gates pass.
    #[wasm_bindgen(js_name = canAdvance)]
    pub fn can_advance(&self) -> bool {
        checkout::can_advance(self.store.current_state())
    }

    /// Unmet forward requirements as a JSON array of names.
    #[wasm_bindgen(js_name = missingRequirementsJson)]
    pub fn missing_requirements_json(&self) -> String {
        let missing = checkout::missing_requirements(self.store.current_state());
        to_json(&missing, "[]")
    }

    /// Summary-step digest as JSON.
    #[wasm_bindgen(js_name = summaryJson)]
    pub fn summary_json(&self) -> String {
        let summary = CheckoutSummary::from_state(self.store.current_state());
        to_json(&summary, "{}")
    }

    /// Sum of cost × quantity.
    #[wasm_bindgen(js_name = cartTotal)]
    pub fn cart_total(&self) -> u64 {
        self.store.current_state().cart_total()
    }

    /// Units in the cart.
    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> u64 {
        self.store.current_state().item_count()
    }

    /// Full catalog as JSON.
    #[wasm_bindgen(js_name = catalogJson)]
    pub fn catalog_json() -> String {
        to_json(Catalog::builtin().items(), "[]")
    }

    /// Payment commitment options as JSON.
    #[wasm_bindgen(js_name = paymentOptionsJson)]
    pub fn payment_options_json() -> String {
        to_json(&PAYMENT_OPTIONS, "[]")
    }

    /// Shipping method options as JSON.
    #[wasm_bindgen(js_name = shippingOptionsJson)]
    pub fn shipping_options_json() -> String {
        to_json(&SHIPPING_OPTIONS, "[]")
    }

    /// Closing-notice copy.
    #[wasm_bindgen(js_name = artNotice)]
    pub fn art_notice() -> String {
        ART_NOTICE.to_owned()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl WebshopApp {
    /// Whole state as a JS object.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be converted.
    pub fn state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.store.current_state())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Register a callback run after every state change.
    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.store.set_render_port(Box::new(JsRenderPort(callback)));
    }
}

#[cfg(target_arch = "wasm32")]
struct JsRenderPort(js_sys::Function);

#[cfg(target_arch = "wasm32")]
impl papsziget_app_core::render_port::RenderPort for JsRenderPort {
    fn request_render(&self) {
        if let Err(err) = self.0.call0(&JsValue::NULL) {
            web_sys::console::error_2(&"onChange callback threw".into(), &err);
        }
    }
}

impl WebshopApp {
    /// Open a handle over an arbitrary backing store (tests, non-browser hosts).
    pub fn with_storage(storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            store: Store::open(storage),
        }
    }

    /// Borrow the current state (host use).
    pub fn current_state(&self) -> &WebshopState {
        self.store.current_state()
    }
}
