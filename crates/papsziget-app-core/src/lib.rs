// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core of the Papsziget art-project webshop: the fixed object catalog, the
//! cart/checkout/theme state machine, and its durable-storage contract.
//! Keeps browser and terminal front ends thin and framework-agnostic.

pub mod action;
pub mod catalog;
pub mod checkout;
pub mod persist;
pub mod reduce;
pub mod render_port;
pub mod state;
pub mod storage;
pub mod store;

pub use action::{Action, FormPatch};
pub use catalog::{Catalog, CatalogItem, PaymentCommitment, ShippingMethod};
pub use state::{CartItem, CheckoutStep, ThemeMode, WebshopState};
pub use store::Store;
