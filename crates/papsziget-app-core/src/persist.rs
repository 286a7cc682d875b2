// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Durable record for the webshop: what gets written, what gets read back.
//!
//! Only the cart and the theme survive a reload. Checkout progress and form
//! data (names, emails, notes) are never written.

use serde::{Deserialize, Serialize};

use crate::state::{CartItem, ThemeState, WebshopState};

/// Fixed key the record lives under.
pub const STORAGE_KEY: &str = "papsziget-webshop-state";

/// The projection of [`WebshopState`] that is written to storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistedState {
    /// Cart lines.
    pub cart: Vec<CartItem>,
    /// Theme preference.
    pub theme: ThemeState,
}

impl PersistedState {
    /// Project the durable fields out of `state`.
    pub fn of(state: &WebshopState) -> Self {
        Self {
            cart: state.cart.clone(),
            theme: state.theme,
        }
    }
}

/// A record as read back; either field may be missing and extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoredRecord {
    /// Stored cart, if any.
    #[serde(default)]
    pub cart: Option<Vec<CartItem>>,
    /// Stored theme, if any.
    #[serde(default)]
    pub theme: Option<ThemeState>,
}

/// Build the startup state from an optional stored record.
///
/// Present fields replace the defaults; checkout is always the default. The
/// stored cart is normalised: zero-quantity lines are dropped and repeated ids
/// fold into their first line.
pub fn rehydrate(record: Option<StoredRecord>) -> WebshopState {
    let mut state = WebshopState::default();
    let Some(record) = record else {
        return state;
    };
    if let Some(cart) = record.cart {
        state.cart = normalize_cart(cart);
    }
    if let Some(theme) = record.theme {
        state.theme = theme;
    }
    state
}

fn normalize_cart(lines: Vec<CartItem>) -> Vec<CartItem> {
    let mut out: Vec<CartItem> = Vec::with_capacity(lines.len());
    for line in lines.into_iter().filter(|l| l.quantity > 0) {
        match out.iter_mut().find(|l| l.object.id == line.object.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => out.push(line),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::catalog::tests::item;
    use crate::state::{CheckoutStep, ThemeMode};

    fn parse(raw: &str) -> serde_json::Result<StoredRecord> {
        serde_json::from_str(raw)
    }

    fn line(object: crate::CatalogItem, quantity: u32) -> CartItem {
        CartItem { object, quantity }
    }

    #[test]
    fn missing_record_gives_default() {
        assert_eq!(rehydrate(None), WebshopState::default());
        let empty = StoredRecord::default();
        assert_eq!(rehydrate(Some(empty)), WebshopState::default());
    }

    #[test]
    fn record_without_cart_or_theme_gives_default() {
        let record = parse(r#"{"unrelated":[1,2,3]}"#).unwrap();
        assert_eq!(rehydrate(Some(record)), WebshopState::default());
    }

    #[test]
    fn theme_only_record_keeps_default_cart() {
        let record = parse(r#"{"theme":{"mode":"dark"}}"#).unwrap();
        let state = rehydrate(Some(record));
        assert!(state.cart.is_empty());
        assert_eq!(state.theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn wrongly_typed_field_is_malformed() {
        assert!(parse(r#"{"cart":"nope"}"#).is_err());
        assert!(parse(r#"{"theme":{"mode":"sepia"}}"#).is_err());
    }

    #[test]
    fn cart_is_normalized_on_rehydrate() {
        let a = item("A3F9Z1", 5600);
        let b = item("B7K2M9", 150);
        let record = StoredRecord {
            cart: Some(vec![line(a.clone(), 2), line(b, 0), line(a, 1)]),
            theme: None,
        };
        let state = rehydrate(Some(record));
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].quantity, 3);
        assert_eq!(state.checkout.step, CheckoutStep::Cart);
    }

    #[test]
    fn projection_excludes_checkout() {
        let mut state = WebshopState::default();
        state.checkout.form.full_name = "Secret".into();
        let json = serde_json::to_string(&PersistedState::of(&state)).unwrap();
        assert_eq!(json, r#"{"cart":[],"theme":{"mode":"light"}}"#);
    }
}
