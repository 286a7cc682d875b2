// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure state transitions for the webshop (cart, checkout, theme).

use crate::action::Action;
use crate::state::{CartItem, CheckoutStep, WebshopState};

/// Apply `action` to `state`, returning the next state.
///
/// Total over [`Action`]; never touches `state` itself. Checkout gates are
/// not enforced here (see [`crate::checkout`]).
pub fn reduce(state: &WebshopState, action: Action) -> WebshopState {
    let mut next = state.clone();
    match action {
        Action::AddToCart { object } => {
            let existing = next.cart.iter_mut().find(|l| l.object.id == object.id);
            if let Some(line) = existing {
                line.quantity = line.quantity.saturating_add(1);
            } else {
                next.cart.push(CartItem {
                    object,
                    quantity: 1,
                });
            }
            next.checkout.step = CheckoutStep::Cart;
        }
        Action::RemoveFromCart { object_id } => {
            next.cart.retain(|l| l.object.id != object_id);
        }
        Action::ClearCart => {
            next.cart.clear();
            next.checkout.selected_payment = None;
            next.checkout.selected_shipping = None;
        }
        Action::SetCheckoutStep { step } => next.checkout.step = step,
        Action::UpdateCheckoutForm { form } => {
            next.checkout.form = form.merged_into(&state.checkout.form);
        }
        Action::SetPayment { payment } => next.checkout.selected_payment = payment,
        Action::SetShippingMethod { method } => next.checkout.selected_shipping = method,
        Action::ToggleTheme => next.theme.mode = next.theme.mode.toggled(),
    }
    next
}
