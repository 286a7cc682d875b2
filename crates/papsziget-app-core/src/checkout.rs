// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Advisory checkout gates and the order summary.
//!
//! Front ends use these to enable or disable their "next" controls. The store
//! applies `SetCheckoutStep` regardless of what is reported here.

use serde::Serialize;

use crate::catalog::{payment_option, shipping_option};
use crate::state::{CheckoutStep, WebshopState};

/// Closing-notice copy shown on the last step.
pub const ART_NOTICE: &str = "Fontos megjegyzés: Ez az oldal művészeti fikció. Az itt \
    található tárgyak a valóságban nem feltétlenül eladóak és nincsenek az oldal készítője \
    birtokában. Az oldalon valójában nem történik fizetés, nem történik adásvétel, és \
    semmilyen kötelezettség nem keletkezik a vállalások teljesítésére.";

/// A condition that must hold before leaving the current step forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Requirement {
    /// Cart has at least one line.
    CartNotEmpty,
    /// Name filled in.
    FullName,
    /// Email filled in.
    Email,
    /// Art-project consent ticked.
    Consent,
    /// Shipping method chosen.
    ShippingMethod,
    /// Address line filled in.
    AddressLine,
    /// City filled in.
    City,
    /// Postal code filled in.
    PostalCode,
    /// Payment commitment chosen.
    Payment,
}

impl Requirement {
    /// Hungarian hint for the missing input.
    pub const fn hint(self) -> &'static str {
        match self {
            Self::CartNotEmpty => "a kosár üres",
            Self::FullName => "hiányzik a név",
            Self::Email => "hiányzik az e-mail cím",
            Self::Consent => "hiányzik a hozzájárulás",
            Self::ShippingMethod => "nincs kiválasztott szállítási mód",
            Self::AddressLine => "hiányzik a cím",
            Self::City => "hiányzik a város",
            Self::PostalCode => "hiányzik az irányítószám",
            Self::Payment => "nincs kiválasztott fizetési mód",
        }
    }
}

/// Requirements still unmet for moving forward from the current step.
///
/// Empty on the summary step; the closing notice has no forward step but
/// reports nothing either.
pub fn missing_requirements(state: &WebshopState) -> Vec<Requirement> {
    let form = &state.checkout.form;
    let shipping_chosen = state.checkout.selected_shipping.is_some();
    let payment_chosen = state.checkout.selected_payment.is_some();
    let checks: Vec<(bool, Requirement)> = match state.checkout.step {
        CheckoutStep::Cart => vec![(!state.cart.is_empty(), Requirement::CartNotEmpty)],
        CheckoutStep::PersonalDetails => vec![
            (!form.full_name.is_empty(), Requirement::FullName),
            (!form.email.is_empty(), Requirement::Email),
            (form.consent_to_art_project, Requirement::Consent),
        ],
        CheckoutStep::ShippingDetails => vec![
            (shipping_chosen, Requirement::ShippingMethod),
            (!form.address_line.is_empty(), Requirement::AddressLine),
            (!form.city.is_empty(), Requirement::City),
            (!form.postal_code.is_empty(), Requirement::PostalCode),
        ],
        CheckoutStep::PaymentMethod => vec![(payment_chosen, Requirement::Payment)],
        CheckoutStep::Summary | CheckoutStep::ClosingNotice => Vec::new(),
    };
    checks
        .into_iter()
        .filter_map(|(ok, req)| (!ok).then_some(req))
        .collect()
}

/// Step the front end may advance to, if the gates allow it.
pub fn advance_target(state: &WebshopState) -> Option<CheckoutStep> {
    let next = state.checkout.step.next()?;
    missing_requirements(state).is_empty().then_some(next)
}

/// `true` when a forward step exists and its gates pass.
pub fn can_advance(state: &WebshopState) -> bool {
    advance_target(state).is_some()
}

/// Read-only digest rendered on the summary step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    /// Buyer's name, if given.
    pub full_name: Option<String>,
    /// Buyer's email, if given.
    pub email: Option<String>,
    /// Note, if given.
    pub notes: Option<String>,
    /// `postal, city, address` with blanks skipped, if any part is given.
    pub shipping_address: Option<String>,
    /// Label of the chosen shipping method.
    pub shipping_label: Option<&'static str>,
    /// Label of the chosen payment commitment.
    pub payment_label: Option<&'static str>,
    /// Total units in the cart.
    pub item_count: u64,
    /// Total fictional cost.
    pub total_cost: u64,
}

impl CheckoutSummary {
    /// Build the summary for `state`.
    pub fn from_state(state: &WebshopState) -> Self {
        let checkout = &state.checkout;
        let form = &checkout.form;
        let shipping = checkout.selected_shipping.map(shipping_option);
        let payment = checkout.selected_payment.map(payment_option);
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_owned());
        let address = [
            form.postal_code.trim(),
            form.city.trim(),
            form.address_line.trim(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
        Self {
            full_name: non_empty(&form.full_name),
            email: non_empty(&form.email),
            notes: non_empty(&form.notes),
            shipping_address: non_empty(&address),
            shipping_label: shipping.map(|option| option.label),
            payment_label: payment.map(|option| option.label),
            item_count: state.item_count(),
            total_cost: state.cart_total(),
        }
    }
}
