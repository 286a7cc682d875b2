// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Webshop state: cart, checkout progress and theme.
//!
//! Field names serialize in camelCase so the persisted record stays
//! compatible with what the browser front end has always written.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, PaymentCommitment, ShippingMethod};

/// One cart line: a catalog item and how many times it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the catalog item.
    pub object: CatalogItem,
    /// Number of times the item was added (always >= 1).
    pub quantity: u32,
}

impl CartItem {
    /// Cost × quantity for this line (saturating).
    pub fn line_cost(&self) -> u64 {
        let quantity = u64::from(self.quantity);
        self.object.cost.saturating_mul(quantity)
    }
}

/// Checkout steps in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Cart review.
    #[default]
    #[serde(rename = "cart")]
    Cart,
    /// Name, email, notes and consent.
    #[serde(rename = "adatok")]
    PersonalDetails,
    /// Address and shipping method.
    #[serde(rename = "szallitas")]
    ShippingDetails,
    /// Payment commitment choice.
    #[serde(rename = "fizetes")]
    PaymentMethod,
    /// Read-only order summary.
    #[serde(rename = "osszegzes")]
    Summary,
    /// Closing art-project notice.
    #[serde(rename = "art_notice")]
    ClosingNotice,
}

impl CheckoutStep {
    /// All steps in flow order.
    pub const ALL: [Self; 6] = [
        Self::Cart,
        Self::PersonalDetails,
        Self::ShippingDetails,
        Self::PaymentMethod,
        Self::Summary,
        Self::ClosingNotice,
    ];

    /// Position in the flow (0-based).
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Following step, or `None` on the closing notice.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Preceding step, or `None` on the cart.
    pub fn previous(self) -> Option<Self> {
        let i = self.index().checked_sub(1)?;
        Self::ALL.get(i).copied()
    }

    /// Wire name (`"cart"`, `"adatok"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::PersonalDetails => "adatok",
            Self::ShippingDetails => "szallitas",
            Self::PaymentMethod => "fizetes",
            Self::Summary => "osszegzes",
            Self::ClosingNotice => "art_notice",
        }
    }
}

/// Free-text checkout form. Nothing here is validated for format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    /// Buyer's name.
    pub full_name: String,
    /// Buyer's email.
    pub email: String,
    /// Free-text note.
    pub notes: String,
    /// Street and house number.
    pub address_line: String,
    /// Postal code.
    pub postal_code: String,
    /// City.
    pub city: String,
    /// Buyer acknowledged the art-project nature of the shop.
    pub consent_to_art_project: bool,
}

/// Checkout progress. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutState {
    /// Current step.
    pub step: CheckoutStep,
    /// Form fields.
    pub form: CheckoutForm,
    /// Chosen payment commitment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_payment: Option<PaymentCommitment>,
    /// Chosen shipping method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_shipping: Option<ShippingMethod>,
}

/// Light/dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current mode.
    pub mode: ThemeMode,
}

/// Aggregate application state owned by the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WebshopState {
    /// Cart lines in insertion order, unique by item id.
    pub cart: Vec<CartItem>,
    /// Checkout progress.
    pub checkout: CheckoutState,
    /// Theme preference.
    pub theme: ThemeState,
}

impl WebshopState {
    /// Cart line for `id`, if present.
    pub fn cart_entry(&self, id: &str) -> Option<&CartItem> {
        self.cart.iter().find(|line| line.object.id == id)
    }

    /// Sum of cost × quantity over the cart (saturating).
    pub fn cart_total(&self) -> u64 {
        self.cart
            .iter()
            .map(CartItem::line_cost)
            .fold(0, u64::saturating_add)
    }

    /// Total number of units in the cart.
    pub fn item_count(&self) -> u64 {
        self.cart.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn default_state_is_empty_light_cart_step() {
        let state = WebshopState::default();
        assert!(state.cart.is_empty());
        assert_eq!(state.checkout.step, CheckoutStep::Cart);
        assert_eq!(state.checkout.form, CheckoutForm::default());
        assert!(!state.checkout.form.consent_to_art_project);
        assert_eq!(state.checkout.selected_payment, None);
        assert_eq!(state.checkout.selected_shipping, None);
        assert_eq!(state.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn steps_walk_in_order() {
        assert_eq!(CheckoutStep::Cart.previous(), None);
        assert_eq!(
            CheckoutStep::Cart.next(),
            Some(CheckoutStep::PersonalDetails)
        );
        assert_eq!(
            CheckoutStep::Summary.next(),
            Some(CheckoutStep::ClosingNotice)
        );
        assert_eq!(CheckoutStep::ClosingNotice.next(), None);
        assert_eq!(
            CheckoutStep::PaymentMethod.previous(),
            Some(CheckoutStep::ShippingDetails)
        );
        for step in CheckoutStep::ALL {
            let wire = serde_json::to_string(&step).unwrap();
            assert_eq!(wire, format!("\"{}\"", step.as_str()));
        }
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        let dark = ThemeState {
            mode: ThemeMode::Dark,
        };
        let wire = serde_json::to_string(&dark).unwrap();
        assert_eq!(wire, r#"{"mode":"dark"}"#);
    }

    #[test]
    fn form_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(CheckoutForm::default()).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("consentToArtProject").is_some());
    }
}
