// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! API surface tests for the WebshopApp bindings (native build, memory storage).

use std::rc::Rc;

use papsziget_app_core::persist::STORAGE_KEY;
use papsziget_app_core::storage::MemoryStore;
use papsziget_app_core::{CheckoutStep, ThemeMode};
use papsziget_wasm::WebshopApp;

fn app() -> WebshopApp {
    WebshopApp::with_storage(Box::new(MemoryStore::new()))
}

#[test]
fn add_by_id_and_totals() {
    let mut app = app();
    assert!(app.add_to_cart("A3F9Z1"));
    assert!(app.add_to_cart("A3F9Z1"));
    assert!(app.add_to_cart("B7K2M9"));
    assert!(!app.add_to_cart("NOPE00"));
    assert_eq!(app.cart_total(), 11350);
    assert_eq!(app.item_count(), 3);
}

#[test]
fn json_dispatch_and_unknown_actions() {
    let mut app = app();
    app.dispatch(r#"{"type":"TOGGLE_THEME"}"#);
    assert_eq!(app.current_state().theme.mode, ThemeMode::Dark);
    let before = app.state_json();
    app.dispatch(r#"{"type":"EXPLODE"}"#);
    app.dispatch("garbage");
    assert_eq!(app.state_json(), before);
}

#[test]
fn gated_walk_through_checkout() {
    let mut app = app();
    assert!(!app.can_advance());
    assert_eq!(app.missing_requirements_json(), r#"["cartNotEmpty"]"#);
    assert!(app.add_to_cart("C1D8Q4"));
    assert!(app.advance());
    assert_eq!(app.current_step(), "adatok");

    assert!(!app.advance());
    app.dispatch(
        r#"{"type":"UPDATE_CHECKOUT_FORM",
            "form":{"fullName":"X","email":"x@y.hu","consentToArtProject":true}}"#,
    );
    assert!(app.advance());
    assert_eq!(app.current_step(), "szallitas");

    app.dispatch(
        r#"{"type":"UPDATE_CHECKOUT_FORM",
            "form":{"addressLine":"Fő utca 1.","city":"Szentendre","postalCode":"2000"}}"#,
    );
    app.dispatch(r#"{"type":"SET_SHIPPING_METHOD","method":"self_pickup"}"#);
    assert!(app.advance());
    app.dispatch(r#"{"type":"SET_PAYMENT","payment":"trees"}"#);
    assert!(app.advance());
    assert_eq!(app.current_step(), "osszegzes");
    let summary = app.summary_json();
    assert!(summary.contains(r#""paymentLabel":"Faültetés""#));
    assert!(app.advance());
    assert_eq!(app.current_step(), "art_notice");
    assert!(!app.advance());

    assert!(app.back());
    assert_eq!(app.current_state().checkout.step, CheckoutStep::Summary);

    app.finish_checkout();
    let state = app.current_state();
    assert!(state.cart.is_empty());
    assert_eq!(state.checkout.step, CheckoutStep::Cart);
    assert_eq!(state.checkout.selected_payment, None);
    assert_eq!(state.checkout.form.full_name, "X");
}

#[test]
fn static_tables_serialize() {
    let catalog: serde_json::Value =
        serde_json::from_str(&WebshopApp::catalog_json()).unwrap();
    assert_eq!(catalog.as_array().map(Vec::len), Some(43));
    let payments: serde_json::Value =
        serde_json::from_str(&WebshopApp::payment_options_json()).unwrap();
    assert_eq!(payments[0]["id"], "trash");
    let shipping: serde_json::Value =
        serde_json::from_str(&WebshopApp::shipping_options_json()).unwrap();
    assert_eq!(shipping[2]["id"], "delivery_agency");
    assert!(WebshopApp::art_notice().starts_with("Fontos megjegyzés"));
}

#[test]
fn reopening_over_same_storage_restores_cart() {
    let shared = Rc::new(MemoryStore::new());
    let mut first = WebshopApp::with_storage(Box::new(Rc::clone(&shared)));
    assert!(first.add_to_cart("A3F9Z1"));
    assert!(first.add_to_cart("A3F9Z1"));
    first.toggle_theme();
    first.dispatch(r#"{"type":"SET_CHECKOUT_STEP","step":"fizetes"}"#);
    let written = shared.get(STORAGE_KEY).unwrap();
    let record: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(record["cart"][0]["quantity"], 2);
    drop(first);

    let second = WebshopApp::with_storage(Box::new(shared));
    let state = second.current_state();
    assert_eq!(second.item_count(), 2);
    assert_eq!(state.theme.mode, ThemeMode::Dark);
    assert_eq!(state.checkout.step, CheckoutStep::Cart);
}
