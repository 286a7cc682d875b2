// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Closed set of state transitions accepted by the store.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, PaymentCommitment, ShippingMethod};
use crate::state::{CheckoutForm, CheckoutStep};

/// A requested state transition.
///
/// The JSON form is internally tagged on `type`, e.g.
/// `{"type":"REMOVE_FROM_CART","objectId":"A3F9Z1"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Add one unit of an item; also returns checkout to the cart step.
    AddToCart {
        /// Item to add.
        object: CatalogItem,
    },
    /// Remove an item's line entirely.
    RemoveFromCart {
        /// Id of the item to remove.
        #[serde(rename = "objectId")]
        object_id: String,
    },
    /// Empty the cart and drop payment/shipping selections.
    ClearCart,
    /// Jump to a step. Not gated.
    SetCheckoutStep {
        /// Target step.
        step: CheckoutStep,
    },
    /// Shallow-merge form fields.
    UpdateCheckoutForm {
        /// Fields to overwrite.
        form: FormPatch,
    },
    /// Replace the payment selection.
    SetPayment {
        /// New selection.
        #[serde(default)]
        payment: Option<PaymentCommitment>,
    },
    /// Replace the shipping selection.
    SetShippingMethod {
        /// New selection.
        #[serde(default)]
        method: Option<ShippingMethod>,
    },
    /// Flip light/dark.
    ToggleTheme,
}

impl Action {
    /// `AddToCart` for `object`.
    pub fn add_to_cart(object: CatalogItem) -> Self {
        Self::AddToCart { object }
    }

    /// `RemoveFromCart` for `id`.
    pub fn remove_from_cart(id: impl Into<String>) -> Self {
        Self::RemoveFromCart {
            object_id: id.into(),
        }
    }

    /// `SetCheckoutStep` for `step`.
    pub fn set_step(step: CheckoutStep) -> Self {
        Self::SetCheckoutStep { step }
    }

    /// Decode a JSON action. Unknown `type`s and malformed payloads yield `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Partial checkout form; `None` fields are left untouched on merge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPatch {
    /// Buyer's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Buyer's email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Street and house number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Art-project consent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_to_art_project: Option<bool>,
}

impl FormPatch {
    /// Return `form` with every `Some` field of the patch written over it.
    pub fn merged_into(&self, form: &CheckoutForm) -> CheckoutForm {
        let consent = self.consent_to_art_project;
        CheckoutForm {
            full_name: overwrite(self.full_name.as_deref(), &form.full_name),
            email: overwrite(self.email.as_deref(), &form.email),
            notes: overwrite(self.notes.as_deref(), &form.notes),
            address_line: overwrite(self.address_line.as_deref(), &form.address_line),
            postal_code: overwrite(self.postal_code.as_deref(), &form.postal_code),
            city: overwrite(self.city.as_deref(), &form.city),
            consent_to_art_project: consent.unwrap_or(form.consent_to_art_project),
        }
    }

    /// `true` when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn overwrite(patch: Option<&str>, current: &str) -> String {
    patch.unwrap_or(current).to_owned()
}
