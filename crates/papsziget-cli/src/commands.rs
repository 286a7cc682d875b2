// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand handlers. Every state change goes through `Store::dispatch`.

use std::io::Write;

use anyhow::{bail, Context, Result};
use papsziget_app_core::checkout::{self, CheckoutSummary, Requirement, ART_NOTICE};
use papsziget_app_core::storage::KeyValueStore;
use papsziget_app_core::{Action, Catalog, CatalogItem, CheckoutStep, FormPatch, Store};
use tracing::debug;

use crate::cli::{CheckoutArgs, Command};
use crate::render;

pub(crate) fn run<S, W>(command: Command, store: &mut Store<S>, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let catalog = Catalog::builtin();
    match command {
        Command::Catalog { category } => {
            let table = match category {
                Some(c) => render::catalog_table(catalog.by_category(c)),
                None => render::catalog_table(catalog.items()),
            };
            writeln!(out, "{table}")?;
        }
        Command::Show { id } => {
            writeln!(out, "{}", render::item_detail(lookup(catalog, &id)?))?;
        }
        Command::Add { ids } => {
            let items = ids
                .iter()
                .map(|id| lookup(catalog, id).cloned())
                .collect::<Result<Vec<_>>>()?;
            for item in items {
                store.dispatch(Action::add_to_cart(item));
            }
            writeln!(out, "{}", render::cart_view(store.current_state()))?;
        }
        Command::Remove { id } => {
            if store.current_state().cart_entry(&id).is_none() {
                debug!(id = %id, "remove: not in cart");
            }
            store.dispatch(Action::remove_from_cart(id));
            writeln!(out, "{}", render::cart_view(store.current_state()))?;
        }
        Command::Clear => {
            store.dispatch(Action::ClearCart);
            writeln!(out, "{}", render::cart_view(store.current_state()))?;
        }
        Command::Cart => writeln!(out, "{}", render::cart_view(store.current_state()))?,
        Command::Theme { toggle } => {
            if toggle {
                store.dispatch(Action::ToggleTheme);
            }
            let mode = store.current_state().theme.mode;
            writeln!(out, "{}", render::theme_label(mode))?;
        }
        Command::Checkout(args) => checkout_flow(store, args, out)?,
        Command::State => {
            let json = serde_json::to_string_pretty(store.current_state())
                .context("serialize state")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

fn lookup<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a CatalogItem> {
    catalog
        .get(&id.to_ascii_uppercase())
        .with_context(|| format!("no catalog object with code {id:?}"))
}

/// Fill in the form, then step forward through every gate to the closing
/// notice. Stops at the first step whose gates do not pass.
///
/// Only the flags that were given touch the form; leaving out `--consent`
/// does not withdraw a consent already on record.
fn checkout_flow<S, W>(store: &mut Store<S>, args: CheckoutArgs, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let form = FormPatch {
        full_name: args.name,
        email: args.email,
        notes: args.notes,
        address_line: args.address,
        postal_code: args.postal_code,
        city: args.city,
        consent_to_art_project: args.consent.then_some(true),
    };
    if !form.is_empty() {
        store.dispatch(Action::UpdateCheckoutForm { form });
    }
    store.dispatch(Action::SetShippingMethod {
        method: args.shipping,
    });
    store.dispatch(Action::SetPayment {
        payment: args.payment,
    });

    while store.current_state().checkout.step != CheckoutStep::ClosingNotice {
        let state = store.current_state();
        if state.checkout.step == CheckoutStep::Summary {
            let summary = CheckoutSummary::from_state(state);
            writeln!(out, "{}", render::summary_view(&summary))?;
        }
        let Some(next) = checkout::advance_target(state) else {
            let hints: Vec<_> = checkout::missing_requirements(state)
                .into_iter()
                .map(Requirement::hint)
                .collect();
            bail!(
                "checkout stopped at {:?}: {}",
                state.checkout.step.as_str(),
                hints.join(", ")
            );
        };
        store.dispatch(Action::set_step(next));
    }

    writeln!(out, "\nKöszönjük a vásárlásod!\n{ART_NOTICE}")?;
    store.dispatch(Action::ClearCart);
    store.dispatch(Action::set_step(CheckoutStep::Cart));
    Ok(())
}
