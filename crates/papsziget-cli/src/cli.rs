// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use papsziget_app_core::catalog::ObjectCategory;
use papsziget_app_core::{PaymentCommitment, ShippingMethod};
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(
    name = "papsziget",
    author,
    version,
    about = "Papsziget webshop: objects of the island, paid for in good deeds"
)]
pub(crate) struct Cli {
    /// Directory holding the saved cart/theme (defaults to the user data dir)
    #[arg(long, global = true)]
    pub(crate) state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List catalog objects
    Catalog {
        /// Only show one category (tárgy, építmény, hulladék)
        #[arg(long, value_parser = parse_wire::<ObjectCategory>)]
        category: Option<ObjectCategory>,
    },
    /// Show one object in detail
    Show {
        /// Object code, e.g. A3F9Z1
        id: String,
    },
    /// Add objects to the cart (repeat a code to add it again)
    Add {
        /// Object codes
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Remove an object from the cart entirely
    Remove {
        /// Object code
        id: String,
    },
    /// Empty the cart
    Clear,
    /// Show the cart and its total
    Cart,
    /// Show or flip the colour theme
    Theme {
        /// Flip light/dark
        #[arg(long)]
        toggle: bool,
    },
    /// Walk the whole checkout with the given details
    Checkout(CheckoutArgs),
    /// Print the raw state as JSON
    State,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CheckoutArgs {
    /// Full name
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Email address
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Free-text note
    #[arg(long)]
    pub(crate) notes: Option<String>,
    /// Acknowledge that this is an art project
    #[arg(long)]
    pub(crate) consent: bool,
    /// Street and house number
    #[arg(long)]
    pub(crate) address: Option<String>,
    /// Postal code
    #[arg(long)]
    pub(crate) postal_code: Option<String>,
    /// City
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Shipping method (self_pickup, water_taxi, delivery_agency)
    #[arg(long, value_parser = parse_wire::<ShippingMethod>)]
    pub(crate) shipping: Option<ShippingMethod>,
    /// Payment commitment (trash, trees, construction_waste)
    #[arg(long, value_parser = parse_wire::<PaymentCommitment>)]
    pub(crate) payment: Option<PaymentCommitment>,
}

/// Parse a value by its JSON wire name.
fn parse_wire<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_owned()))
        .map_err(|_| format!("unknown value {raw:?}"))
}
