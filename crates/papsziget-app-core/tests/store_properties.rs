// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Store-level properties: cart uniqueness, persistence round-trips and
//! startup recovery from bad records.

use papsziget_app_core::persist::STORAGE_KEY;
use papsziget_app_core::storage::MemoryStore;
use papsziget_app_core::{
    Action, Catalog, CatalogItem, CheckoutStep, FormPatch, Store, ThemeMode, WebshopState,
};
use proptest::prelude::*;

fn item(id: &str) -> CatalogItem {
    Catalog::builtin().get(id).cloned().unwrap()
}

fn nth(i: usize) -> CatalogItem {
    Catalog::builtin().items()[i].clone()
}

fn any_step() -> impl Strategy<Value = CheckoutStep> {
    prop::sample::select(CheckoutStep::ALL.to_vec())
}

proptest! {
    #[test]
    fn cart_stays_unique_and_counts_adds(picks in prop::collection::vec(0usize..43, 0..64)) {
        let mut store = Store::open(MemoryStore::new());
        for &i in &picks {
            store.dispatch(Action::add_to_cart(nth(i)));
        }
        let cart = &store.current_state().cart;
        for (n, line) in cart.iter().enumerate() {
            let id = &line.object.id;
            prop_assert!(cart[n + 1..].iter().all(|l| &l.object.id != id));
            let adds = picks.iter().filter(|&&i| &nth(i).id == id).count();
            prop_assert_eq!(line.quantity as usize, adds);
        }
        let distinct: std::collections::BTreeSet<_> = picks.iter().collect();
        prop_assert_eq!(cart.len(), distinct.len());
    }

    #[test]
    fn reopening_restores_cart_and_theme_only(
        picks in prop::collection::vec(0usize..43, 1..16),
        dark in any::<bool>(),
    ) {
        let mut store = Store::open(MemoryStore::new());
        for &i in &picks {
            store.dispatch(Action::add_to_cart(nth(i)));
        }
        if dark {
            store.dispatch(Action::ToggleTheme);
        }
        store.dispatch(Action::set_step(CheckoutStep::Summary));
        let before = store.current_state().clone();

        let reopened = Store::open(store.into_storage());
        let after = reopened.current_state();
        prop_assert_eq!(&after.cart, &before.cart);
        prop_assert_eq!(after.theme, before.theme);
        prop_assert_eq!(&after.checkout, &WebshopState::default().checkout);
    }

    #[test]
    fn arbitrary_stored_bytes_never_break_startup(
        bytes in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let store = Store::open(MemoryStore::with_entry(STORAGE_KEY, bytes));
        let checkout = &store.current_state().checkout;
        prop_assert_eq!(checkout, &WebshopState::default().checkout);
    }

    #[test]
    fn adding_from_any_step_returns_to_cart(step in any_step(), pick in 0usize..43) {
        let mut store = Store::open(MemoryStore::new());
        store.dispatch(Action::set_step(step));
        store.dispatch(Action::add_to_cart(nth(pick)));
        let state = store.current_state();
        prop_assert_eq!(state.checkout.step, CheckoutStep::Cart);
        prop_assert_eq!(state.item_count(), 1);
    }

    #[test]
    fn clearing_from_any_step_keeps_step_and_form(
        step in any_step(),
        picks in prop::collection::vec(0usize..43, 0..8),
        name in "[a-zA-Z ]{0,12}",
    ) {
        let mut store = Store::open(MemoryStore::new());
        for &i in &picks {
            store.dispatch(Action::add_to_cart(nth(i)));
        }
        store.dispatch(Action::UpdateCheckoutForm {
            form: FormPatch {
                full_name: Some(name.clone()),
                ..FormPatch::default()
            },
        });
        store.dispatch(Action::set_step(step));
        store.dispatch(Action::ClearCart);
        let state = store.current_state();
        prop_assert!(state.cart.is_empty());
        prop_assert_eq!(state.checkout.step, step);
        prop_assert_eq!(&state.checkout.form.full_name, &name);
        prop_assert_eq!(state.checkout.selected_payment, None);
        prop_assert_eq!(state.checkout.selected_shipping, None);
    }
}

#[test]
fn concrete_cart_scenario_totals_11350() {
    let mut store = Store::open(MemoryStore::new());
    store.dispatch(Action::add_to_cart(item("A3F9Z1")));
    store.dispatch(Action::add_to_cart(item("A3F9Z1")));
    store.dispatch(Action::add_to_cart(item("B7K2M9")));
    let state = store.current_state();
    let lines: Vec<_> = state
        .cart
        .iter()
        .map(|l| (l.object.id.as_str(), l.quantity))
        .collect();
    assert_eq!(lines, vec![("A3F9Z1", 2), ("B7K2M9", 1)]);
    assert_eq!(state.cart_total(), 11350);
}

#[test]
fn dark_cart_round_trips_through_storage() {
    let mut store = Store::open(MemoryStore::new());
    store.dispatch(Action::add_to_cart(item("C1D8Q4")));
    store.dispatch(Action::ToggleTheme);
    store.dispatch(Action::set_step(CheckoutStep::PaymentMethod));
    store.dispatch(Action::UpdateCheckoutForm {
        form: FormPatch {
            full_name: Some("X".into()),
            ..FormPatch::default()
        },
    });
    let cart = store.current_state().cart.clone();

    let reopened = Store::open(store.into_storage());
    let state = reopened.current_state();
    assert_eq!(state.cart, cart);
    assert_eq!(state.theme.mode, ThemeMode::Dark);
    assert_eq!(state.checkout.step, CheckoutStep::Cart);
    assert_eq!(state.checkout.form.full_name, "");
    assert_eq!(state.checkout.selected_payment, None);
}

#[test]
fn malformed_records_fall_back_to_default() {
    for raw in [
        "literal invalid text",
        "{}",
        r#"{"checkout":{"step":"fizetes"}}"#,
        r#"{"cart":42,"theme":{"mode":"dark"}}"#,
        "null",
        "[]",
    ] {
        let store = Store::open(MemoryStore::with_entry(STORAGE_KEY, raw));
        let state = store.current_state();
        assert_eq!(state, &WebshopState::default(), "payload {raw:?}");
    }
}

#[test]
fn extra_fields_in_record_are_ignored() {
    let raw = r#"{"cart":[],"theme":{"mode":"dark"},"checkout":{"step":"osszegzes"},"v":3}"#;
    let store = Store::open(MemoryStore::with_entry(STORAGE_KEY, raw));
    assert_eq!(store.current_state().theme.mode, ThemeMode::Dark);
    assert_eq!(store.current_state().checkout.step, CheckoutStep::Cart);
}

#[test]
fn clear_cart_is_persisted() {
    let mut store = Store::open(MemoryStore::new());
    store.dispatch(Action::add_to_cart(item("A3F9Z1")));
    store.dispatch(Action::ClearCart);
    let raw = store.storage().get(STORAGE_KEY).unwrap();
    assert_eq!(raw, br#"{"cart":[],"theme":{"mode":"light"}}"#.to_vec());
}
